//! REST implementation of the gateway traits (reqwest; fetch on wasm32).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{
    AuthGateway, FoodGateway, FoodsEnvelope, GatewayError, GatewayResult, MutationAck, NewFood,
    PartnerEnvelope, UserEnvelope,
};
use crate::config::GatewayConfig;
use crate::domain::{
    Credentials, Engagement, Food, FoodId, FoodPartner, PartnerProfile, PartnerStats,
    RegisterConsumer, RegisterPartner, Role, User,
};

/// Multipart field the backend reads the video binary from
const VIDEO_FIELD: &str = "mama";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FoodIdArgs<'a> {
    food_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        Ok(Self {
            client: build_client(&config)?,
            config,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.config.endpoint(path));
        #[cfg(target_arch = "wasm32")]
        let builder = if self.config.include_credentials {
            builder.fetch_credentials_include()
        } else {
            builder
        };
        builder
    }

    async fn send_raw(&self, builder: RequestBuilder) -> GatewayResult<Vec<u8>> {
        let request = builder.build()?;
        let label = format!("{} {}", request.method(), request.url().path());
        log::debug!("[gateway] -> {}", label);

        let response = self.client.execute(request).await.map_err(|e| {
            log::warn!("[gateway] {} failed: {}", label, e);
            GatewayError::from(e)
        })?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            let err = GatewayError::from_status(status.as_u16(), &body);
            if err.is_unauthorized() {
                log::info!("[gateway] {} needs a signed-in session", label);
            } else {
                log::warn!("[gateway] {} returned {}", label, status);
            }
            return Err(err);
        }
        log::debug!("[gateway] <- {} {}", label, status);
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> GatewayResult<T> {
        let body = self.send_raw(builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(target_arch = "wasm32")]
fn build_client(_config: &GatewayConfig) -> GatewayResult<reqwest::Client> {
    Ok(reqwest::Client::new())
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &GatewayConfig) -> GatewayResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .cookie_store(config.include_credentials)
        .build()?)
}

fn engagement_path(kind: Engagement) -> &'static str {
    match kind {
        Engagement::Like => "/api/food/like",
        Engagement::Save => "/api/food/save",
    }
}

fn partner_path(partner_id: &str) -> String {
    format!("/api/food-partner/{}", utf8_percent_encode(partner_id, NON_ALPHANUMERIC))
}

fn auth_path(role: Role, action: &str) -> String {
    format!("/api/auth/{}/{}", role.auth_segment(), action)
}

#[async_trait(?Send)]
impl FoodGateway for HttpGateway {
    async fn list_feed(&self) -> GatewayResult<Vec<Food>> {
        let envelope: FoodsEnvelope = self.send(self.request(Method::GET, "/api/food")).await?;
        Ok(envelope.foods)
    }

    async fn list_saved(&self) -> GatewayResult<Vec<Food>> {
        let envelope: FoodsEnvelope = self.send(self.request(Method::GET, "/api/food/save")).await?;
        Ok(envelope.foods)
    }

    async fn toggle(&self, kind: Engagement, food_id: &FoodId) -> GatewayResult<MutationAck> {
        let builder = self
            .request(Method::POST, engagement_path(kind))
            .json(&FoodIdArgs { food_id: food_id.as_str() });
        let body = self.send_raw(builder).await?;
        // The ack is advisory; an unreadable body still counts as success
        Ok(serde_json::from_slice(&body).unwrap_or_default())
    }

    async fn partner_profile(&self, partner_id: &str) -> GatewayResult<PartnerProfile> {
        self.send(self.request(Method::GET, &partner_path(partner_id))).await
    }

    async fn partner_stats(&self) -> GatewayResult<PartnerStats> {
        self.send(self.request(Method::GET, "/api/food/partner/stats")).await
    }

    async fn upload_food(&self, upload: NewFood) -> GatewayResult<()> {
        let NewFood { name, description, video } = upload;
        let part = reqwest::multipart::Part::bytes(video.bytes)
            .file_name(video.file_name)
            .mime_str(&video.mime)?;
        let form = reqwest::multipart::Form::new()
            .text("name", name)
            .text("description", description)
            .part(VIDEO_FIELD, part);

        self.send_raw(self.request(Method::POST, "/api/food").multipart(form)).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl AuthGateway for HttpGateway {
    async fn login_consumer(&self, credentials: &Credentials) -> GatewayResult<User> {
        let builder = self.request(Method::POST, &auth_path(Role::Consumer, "login")).json(credentials);
        let envelope: UserEnvelope = self.send(builder).await?;
        Ok(envelope.user)
    }

    async fn login_partner(&self, credentials: &Credentials) -> GatewayResult<FoodPartner> {
        let builder = self.request(Method::POST, &auth_path(Role::Partner, "login")).json(credentials);
        let envelope: PartnerEnvelope = self.send(builder).await?;
        Ok(envelope.partner)
    }

    async fn register_consumer(&self, data: &RegisterConsumer) -> GatewayResult<User> {
        let builder = self.request(Method::POST, &auth_path(Role::Consumer, "register")).json(data);
        let envelope: UserEnvelope = self.send(builder).await?;
        Ok(envelope.user)
    }

    async fn register_partner(&self, data: &RegisterPartner) -> GatewayResult<FoodPartner> {
        let builder = self.request(Method::POST, &auth_path(Role::Partner, "register")).json(data);
        let envelope: PartnerEnvelope = self.send(builder).await?;
        Ok(envelope.partner)
    }

    async fn logout(&self, role: Role) -> GatewayResult<()> {
        self.send_raw(self.request(Method::GET, &auth_path(role, "logout"))).await?;
        Ok(())
    }
}
