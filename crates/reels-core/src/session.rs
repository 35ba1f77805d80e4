//! Session State Holder
//!
//! Who is signed in. Every successful login/register replaces the session
//! wholesale; logout always clears it, whatever the backend says.

use crate::domain::{Credentials, FoodPartner, RegisterConsumer, RegisterPartner, Role, User};
use crate::gateway::{AuthGateway, GatewayResult};
use crate::state::StateCell;

/// Authenticated identity; the role and its record travel together
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Anonymous,
    Consumer(User),
    Partner(FoodPartner),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Session::Anonymous)
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Anonymous => None,
            Session::Consumer(_) => Some(Role::Consumer),
            Session::Partner(_) => Some(Role::Partner),
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Consumer(user) => Some(user),
            _ => None,
        }
    }

    pub fn partner(&self) -> Option<&FoodPartner> {
        match self {
            Session::Partner(partner) => Some(partner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// A logout is in flight; guards wait instead of redirecting
    pub is_loading: bool,
    pub session: Session,
}

impl SessionState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            is_loading: false,
            session,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }
}

/// Session operations bound to a state cell and an auth gateway
pub struct SessionHolder<C, G> {
    state: C,
    gateway: G,
}

impl<C, G> SessionHolder<C, G>
where
    C: StateCell<SessionState>,
    G: AuthGateway,
{
    pub fn new(state: C, gateway: G) -> Self {
        Self { state, gateway }
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.read(SessionState::clone).unwrap_or_default()
    }

    pub async fn login_consumer(&self, credentials: &Credentials) -> GatewayResult<()> {
        let user = self.gateway.login_consumer(credentials).await?;
        self.establish(Session::Consumer(user));
        Ok(())
    }

    pub async fn login_partner(&self, credentials: &Credentials) -> GatewayResult<()> {
        let partner = self.gateway.login_partner(credentials).await?;
        self.establish(Session::Partner(partner));
        Ok(())
    }

    pub async fn register_consumer(&self, data: &RegisterConsumer) -> GatewayResult<()> {
        let user = self.gateway.register_consumer(data).await?;
        self.establish(Session::Consumer(user));
        Ok(())
    }

    pub async fn register_partner(&self, data: &RegisterPartner) -> GatewayResult<()> {
        let partner = self.gateway.register_partner(data).await?;
        self.establish(Session::Partner(partner));
        Ok(())
    }

    /// Best-effort remote, guaranteed local
    pub async fn logout(&self) {
        if let Some(role) = self.snapshot().role() {
            self.state.write(|s| s.is_loading = true);
            if let Err(e) = self.gateway.logout(role).await {
                log::warn!("[session] remote logout for {} failed: {}", role.as_str(), e);
            }
        }
        self.state.replace(SessionState::default());
        log::info!("[session] signed out");
    }

    fn establish(&self, session: Session) {
        log::info!(
            "[session] signed in as {}",
            session.role().map(|r| r.as_str()).unwrap_or("none")
        );
        self.state.replace(SessionState::signed_in(session));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::GatewayError;
    use crate::testing::{partner, user, ScriptedGateway};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn holder(gateway: &ScriptedGateway) -> (Rc<RefCell<SessionState>>, SessionHolder<Rc<RefCell<SessionState>>, ScriptedGateway>) {
        let state = Rc::new(RefCell::new(SessionState::default()));
        (state.clone(), SessionHolder::new(state, gateway.clone()))
    }

    #[tokio::test]
    async fn test_login_replaces_session_wholesale() {
        let gateway = ScriptedGateway::new();
        let (state, holder) = holder(&gateway);

        gateway.push_partner_login(Ok(partner("p1", "Tasty Kitchen")));
        holder.login_partner(&Credentials::default()).await.unwrap();
        assert_eq!(state.borrow().role(), Some(Role::Partner));

        gateway.push_consumer_login(Ok(user("u1", "Ana")));
        holder.login_consumer(&Credentials::default()).await.unwrap();

        let snapshot = holder.snapshot();
        assert_eq!(snapshot.role(), Some(Role::Consumer));
        assert!(snapshot.session.partner().is_none());
        assert_eq!(snapshot.session.user().map(|u| u.id.as_str()), Some("u1"));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_untouched() {
        let gateway = ScriptedGateway::new();
        let (state, holder) = holder(&gateway);
        gateway.push_consumer_login(Ok(user("u1", "Ana")));
        holder.login_consumer(&Credentials::default()).await.unwrap();
        let before = state.borrow().clone();

        gateway.push_partner_register(Err(GatewayError::from_status(409, br#"{"message":"taken"}"#)));
        let err = holder.register_partner(&RegisterPartner::default()).await.unwrap_err();

        assert_eq!(err.user_message(), Some("taken"));
        assert_eq!(*state.borrow(), before);
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_remote_fails() {
        let gateway = ScriptedGateway::new();
        let (state, holder) = holder(&gateway);
        gateway.push_consumer_register(Ok(user("u1", "Ana")));
        holder.register_consumer(&RegisterConsumer::default()).await.unwrap();

        gateway.push_logout(Err(GatewayError::Network("offline".into())));
        holder.logout().await;

        assert_eq!(*state.borrow(), SessionState::default());
        assert!(!state.borrow().is_authenticated());
        assert_eq!(gateway.logout_calls(), vec![Role::Consumer]);
    }

    #[tokio::test]
    async fn test_logout_without_role_skips_remote() {
        let gateway = ScriptedGateway::new();
        let (state, holder) = holder(&gateway);

        holder.logout().await;

        assert!(gateway.logout_calls().is_empty());
        assert_eq!(*state.borrow(), SessionState::default());
    }
}
