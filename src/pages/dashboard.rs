//! Partner Dashboard
//!
//! Own reels and aggregate stats, loaded together.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reels_core::loaders::{self, Dashboard};
use reels_core::Route;

use crate::commands;
use crate::components::{FoodGrid, Layout, Spinner};
use crate::context::use_app_context;

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-value">{value}</p>
            <p class="stat-label">{label}</p>
        </div>
    }
}

#[component]
pub fn PartnerDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let dashboard = RwSignal::new(Dashboard::default());
    let (loading, set_loading) = signal(true);

    let partner = ctx.session.with_untracked(|s| s.session.partner().cloned());
    let partner_name = partner.as_ref().map(|p| p.name.clone()).unwrap_or_default();

    match partner.map(|p| p.id) {
        Some(partner_id) => spawn_local(async move {
            let loaded =
                loaders::load_dashboard(&commands::api(), &ctx.notifier(), &partner_id).await;
            dashboard.set(loaded);
            set_loading.set(false);
        }),
        // The guard only renders this page for partners
        None => set_loading.set(false),
    }

    let to_upload = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.navigate(Route::PartnerUpload);
    };

    view! {
        <Layout>
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                let Dashboard { foods, stats } = dashboard.get();
                view! {
                    <div class="dashboard">
                        <h1>{format!("Welcome back, {} 👋", partner_name)}</h1>
                        <p class="muted">"Here's how your food reels are performing"</p>

                        <div class="stat-grid">
                            <StatCard label="Total Reels" value=stats.total_reels.to_string() />
                            <StatCard label="Total Likes" value=stats.total_likes.to_string() />
                            <StatCard label="Total Saves" value=stats.total_saves.to_string() />
                            <StatCard label="Avg. Engagement" value=format!("{:.1}", stats.avg_engagement) />
                        </div>

                        <div class="upload-cta">
                            <div>
                                <h3>"Share your latest creation"</h3>
                                <p>"Upload a new food reel and reach more food lovers"</p>
                            </div>
                            <a class="button" href="/partner/upload" on:click=to_upload>"Upload Reel"</a>
                        </div>

                        <h2>"Your Food Reels"</h2>
                        {if foods.is_empty() {
                            view! {
                                <div class="empty-state">
                                    <h3>"No reels yet"</h3>
                                    <p>"Start uploading your delicious food content"</p>
                                    <a class="button primary" href="/partner/upload" on:click=to_upload>
                                        "Upload Your First Reel"
                                    </a>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! { <FoodGrid foods=foods /> }.into_any()
                        }}
                    </div>
                }
                .into_any()
            }}
        </Layout>
    }
}
