//! Test doubles: a scripted gateway and a recording notifier.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::domain::{
    Credentials, Engagement, Food, FoodId, FoodPartner, PartnerProfile, PartnerStats,
    RegisterConsumer, RegisterPartner, Role, User,
};
use crate::gateway::{AuthGateway, FoodGateway, GatewayError, GatewayResult, MutationAck, NewFood};
use crate::notify::{Notifier, Toast};

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        full_name: name.to_string(),
        email: format!("{}@example.com", id),
    }
}

pub fn partner(id: &str, name: &str) -> FoodPartner {
    FoodPartner {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        phone: None,
        address: None,
        contact_name: None,
    }
}

pub fn food(id: &str, likes: u64, is_liked: bool) -> Food {
    let mut food = Food::new(id, format!("Dish {}", id));
    food.likes = likes;
    food.is_liked = is_liked;
    food
}

enum Reply<T> {
    Ready(GatewayResult<T>),
    Deferred(oneshot::Receiver<GatewayResult<T>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> GatewayResult<T> {
        match self {
            Reply::Ready(result) => result,
            Reply::Deferred(rx) => rx
                .await
                .unwrap_or_else(|_| Err(GatewayError::Network("reply dropped".into()))),
        }
    }
}

fn unscripted<T>(what: &str) -> GatewayResult<T> {
    Err(GatewayError::Request(format!("no scripted reply for {}", what)))
}

#[derive(Default)]
struct Script {
    feed: VecDeque<GatewayResult<Vec<Food>>>,
    saved: VecDeque<GatewayResult<Vec<Food>>>,
    toggles: VecDeque<Reply<MutationAck>>,
    profiles: VecDeque<GatewayResult<PartnerProfile>>,
    stats: VecDeque<GatewayResult<PartnerStats>>,
    uploads: VecDeque<GatewayResult<()>>,
    consumer_logins: VecDeque<GatewayResult<User>>,
    partner_logins: VecDeque<GatewayResult<FoodPartner>>,
    consumer_registers: VecDeque<GatewayResult<User>>,
    partner_registers: VecDeque<GatewayResult<FoodPartner>>,
    logouts: VecDeque<GatewayResult<()>>,
    toggle_calls: Vec<(Engagement, FoodId)>,
    upload_calls: Vec<NewFood>,
    logout_calls: Vec<Role>,
}

/// Gateway that answers from queued replies, in order
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    script: Rc<RefCell<Script>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_feed(&self, reply: GatewayResult<Vec<Food>>) {
        self.script.borrow_mut().feed.push_back(reply);
    }

    pub fn push_saved(&self, reply: GatewayResult<Vec<Food>>) {
        self.script.borrow_mut().saved.push_back(reply);
    }

    pub fn push_toggle(&self, reply: GatewayResult<MutationAck>) {
        self.script.borrow_mut().toggles.push_back(Reply::Ready(reply));
    }

    /// Queue a toggle reply the test resolves later
    pub fn defer_toggle(&self) -> oneshot::Sender<GatewayResult<MutationAck>> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().toggles.push_back(Reply::Deferred(rx));
        tx
    }

    pub fn push_profile(&self, reply: GatewayResult<PartnerProfile>) {
        self.script.borrow_mut().profiles.push_back(reply);
    }

    pub fn push_stats(&self, reply: GatewayResult<PartnerStats>) {
        self.script.borrow_mut().stats.push_back(reply);
    }

    pub fn push_upload(&self, reply: GatewayResult<()>) {
        self.script.borrow_mut().uploads.push_back(reply);
    }

    pub fn push_consumer_login(&self, reply: GatewayResult<User>) {
        self.script.borrow_mut().consumer_logins.push_back(reply);
    }

    pub fn push_partner_login(&self, reply: GatewayResult<FoodPartner>) {
        self.script.borrow_mut().partner_logins.push_back(reply);
    }

    pub fn push_consumer_register(&self, reply: GatewayResult<User>) {
        self.script.borrow_mut().consumer_registers.push_back(reply);
    }

    pub fn push_partner_register(&self, reply: GatewayResult<FoodPartner>) {
        self.script.borrow_mut().partner_registers.push_back(reply);
    }

    pub fn push_logout(&self, reply: GatewayResult<()>) {
        self.script.borrow_mut().logouts.push_back(reply);
    }

    pub fn toggle_calls(&self) -> Vec<(Engagement, FoodId)> {
        self.script.borrow().toggle_calls.clone()
    }

    pub fn upload_calls(&self) -> Vec<NewFood> {
        self.script.borrow().upload_calls.clone()
    }

    pub fn logout_calls(&self) -> Vec<Role> {
        self.script.borrow().logout_calls.clone()
    }
}

#[async_trait(?Send)]
impl FoodGateway for ScriptedGateway {
    async fn list_feed(&self) -> GatewayResult<Vec<Food>> {
        let reply = self.script.borrow_mut().feed.pop_front();
        reply.unwrap_or_else(|| unscripted("list_feed"))
    }

    async fn list_saved(&self) -> GatewayResult<Vec<Food>> {
        let reply = self.script.borrow_mut().saved.pop_front();
        reply.unwrap_or_else(|| unscripted("list_saved"))
    }

    async fn toggle(&self, kind: Engagement, food_id: &FoodId) -> GatewayResult<MutationAck> {
        let reply = {
            let mut script = self.script.borrow_mut();
            script.toggle_calls.push((kind, food_id.clone()));
            script.toggles.pop_front()
        };
        match reply {
            Some(reply) => reply.resolve().await,
            None => unscripted("toggle"),
        }
    }

    async fn partner_profile(&self, _partner_id: &str) -> GatewayResult<PartnerProfile> {
        let reply = self.script.borrow_mut().profiles.pop_front();
        reply.unwrap_or_else(|| unscripted("partner_profile"))
    }

    async fn partner_stats(&self) -> GatewayResult<PartnerStats> {
        let reply = self.script.borrow_mut().stats.pop_front();
        reply.unwrap_or_else(|| unscripted("partner_stats"))
    }

    async fn upload_food(&self, upload: NewFood) -> GatewayResult<()> {
        let mut script = self.script.borrow_mut();
        script.upload_calls.push(upload);
        script.uploads.pop_front().unwrap_or_else(|| unscripted("upload_food"))
    }
}

#[async_trait(?Send)]
impl AuthGateway for ScriptedGateway {
    async fn login_consumer(&self, _credentials: &Credentials) -> GatewayResult<User> {
        let reply = self.script.borrow_mut().consumer_logins.pop_front();
        reply.unwrap_or_else(|| unscripted("login_consumer"))
    }

    async fn login_partner(&self, _credentials: &Credentials) -> GatewayResult<FoodPartner> {
        let reply = self.script.borrow_mut().partner_logins.pop_front();
        reply.unwrap_or_else(|| unscripted("login_partner"))
    }

    async fn register_consumer(&self, _data: &RegisterConsumer) -> GatewayResult<User> {
        let reply = self.script.borrow_mut().consumer_registers.pop_front();
        reply.unwrap_or_else(|| unscripted("register_consumer"))
    }

    async fn register_partner(&self, _data: &RegisterPartner) -> GatewayResult<FoodPartner> {
        let reply = self.script.borrow_mut().partner_registers.pop_front();
        reply.unwrap_or_else(|| unscripted("register_partner"))
    }

    async fn logout(&self, role: Role) -> GatewayResult<()> {
        let mut script = self.script.borrow_mut();
        script.logout_calls.push(role);
        script.logouts.pop_front().unwrap_or(Ok(()))
    }
}

/// Notifier that remembers every toast
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    toasts: Rc<RefCell<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}
