//! Sign-in and Registration
//!
//! Login picks a role with a toggle; each register page creates one kind of account.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reels_core::{
    Credentials, GatewayResult, RegisterConsumer, RegisterPartner, Role, Route, Toast,
};

use crate::context::{use_app_context, AppContext};

/// Labelled text input bound to a signal
#[component]
fn Field(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                class="field-input"
                type=kind
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Password input with a show/hide toggle
#[component]
fn PasswordField(value: RwSignal<String>) -> impl IntoView {
    let shown = RwSignal::new(false);
    view! {
        <label class="field">
            <span class="field-label">"Password"</span>
            <div class="password-row">
                <input
                    class="field-input"
                    type=move || if shown.get() { "text" } else { "password" }
                    placeholder="••••••••"
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="password-toggle"
                    on:click=move |_| shown.update(|s| *s = !*s)
                >
                    {move || if shown.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </label>
    }
}

/// Link that navigates without a page load
#[component]
fn RouteLink(route: Route, children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let href = route.path();
    view! {
        <a
            class="auth-link"
            href=href
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(route.clone());
            }
        >
            {children()}
        </a>
    }
}

/// Run a session call with the submit button locked, then toast and move on
fn submit_auth<F>(
    ctx: AppContext,
    submitting: RwSignal<bool>,
    failure_title: &'static str,
    failure_fallback: &'static str,
    success: Toast,
    destination: impl FnOnce() -> Route + 'static,
    call: impl FnOnce() -> F + 'static,
) where
    F: std::future::Future<Output = GatewayResult<()>> + 'static,
{
    if submitting.get_untracked() {
        return;
    }
    submitting.set(true);
    spawn_local(async move {
        let result = call().await;
        submitting.try_set(false);
        match result {
            Ok(()) => {
                ctx.notify(success);
                ctx.navigate(destination());
            }
            Err(e) => {
                log::warn!("[auth] {}: {}", failure_title, e);
                ctx.notify(Toast::error(
                    failure_title,
                    e.user_message().unwrap_or(failure_fallback),
                ));
            }
        }
    });
}

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();
    let role = RwSignal::new(Role::Consumer);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let role = role.get_untracked();
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        submit_auth(
            ctx,
            submitting,
            "Login failed",
            "Invalid credentials. Please try again.",
            Toast::info("Welcome back! 🎉", "You have successfully logged in."),
            // A bounce from a protected page wins over the role's home
            move || ctx.take_return().unwrap_or(Route::home(role)),
            move || async move {
                let holder = ctx.session_holder();
                match role {
                    Role::Consumer => holder.login_consumer(&credentials).await,
                    Role::Partner => holder.login_partner(&credentials).await,
                }
            },
        );
    };

    let role_button = move |target: Role, label: &'static str| {
        view! {
            <button
                type="button"
                class="role-option"
                class:selected=move || role.get() == target
                on:click=move |_| role.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Welcome back"</h1>
                <div class="role-toggle">
                    {role_button(Role::Consumer, "User")}
                    {role_button(Role::Partner, "Food Partner")}
                </div>
                <Field label="Email" kind="email" placeholder="you@example.com" value=email />
                <PasswordField value=password />
                <button class="button primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-footer">
                    "New here? "
                    <RouteLink route=Route::Register>"Create an account"</RouteLink>
                    " or "
                    <RouteLink route=Route::PartnerRegister>"join as a partner"</RouteLink>
                </p>
            </form>
        </div>
    }
}

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = RegisterConsumer {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        submit_auth(
            ctx,
            submitting,
            "Registration failed",
            "Something went wrong. Please try again.",
            Toast::info("Welcome to FoodReels! 🎉", "Your account has been created successfully."),
            || Route::Feed,
            move || async move { ctx.session_holder().register_consumer(&data).await },
        );
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create your account"</h1>
                <Field label="Full name" placeholder="Jane Doe" value=full_name />
                <Field label="Email" kind="email" placeholder="you@example.com" value=email />
                <PasswordField value=password />
                <button class="button primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </button>
                <p class="auth-footer">
                    "Already have an account? "
                    <RouteLink route=Route::Login>"Sign in"</RouteLink>
                </p>
            </form>
        </div>
    }
}

#[component]
pub fn PartnerRegister() -> impl IntoView {
    let ctx = use_app_context();
    let name = RwSignal::new(String::new());
    let contact_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = RegisterPartner {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            contact_name: contact_name.get_untracked(),
        };
        submit_auth(
            ctx,
            submitting,
            "Registration failed",
            "Something went wrong. Please try again.",
            Toast::info(
                "Welcome to FoodReels! 🎉",
                "Your partner account has been created successfully.",
            ),
            || Route::PartnerDashboard,
            move || async move { ctx.session_holder().register_partner(&data).await },
        );
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Become a food partner"</h1>
                <Field label="Business name" placeholder="Tasty Kitchen" value=name />
                <Field label="Contact name" placeholder="John Doe" value=contact_name />
                <Field label="Email" kind="email" placeholder="partner@example.com" value=email />
                <Field label="Phone" kind="tel" placeholder="+1 (555) 123-4567" value=phone />
                <Field label="Address" placeholder="123 Food Street, City" value=address />
                <PasswordField value=password />
                <button class="button primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Create partner account" }}
                </button>
                <p class="auth-footer">
                    "Already a partner? "
                    <RouteLink route=Route::Login>"Sign in"</RouteLink>
                </p>
            </form>
        </div>
    }
}
