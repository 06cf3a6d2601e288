//! Types for community actions: login, trade offers, market, confirmations.

use serde::{Deserialize, Serialize};

use crate::auth::ConfirmationTag;
use crate::types::serde_helpers::{int_bool, string_or_number};
use crate::types::{AppId, ContextId, SteamId};

/// Response from the password login endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    /// Whether the login succeeded.
    #[serde(default)]
    pub success: bool,
    /// A Steam Guard code is needed.
    #[serde(default)]
    pub requires_twofactor: bool,
    /// A captcha must be solved first.
    #[serde(default)]
    pub captcha_needed: bool,
    /// Captcha id; Steam sends `-1` when there is none.
    #[serde(default)]
    pub captcha_gid: serde_json::Value,
    /// Human-readable failure reason.
    #[serde(default)]
    pub message: String,
}

impl LoginResponse {
    /// Captcha id as text.
    pub fn captcha_gid(&self) -> String {
        match &self.captcha_gid {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// One item in a trade offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeAsset {
    /// Game id.
    pub appid: AppId,
    /// Inventory context.
    #[serde(with = "string_or_number")]
    pub contextid: ContextId,
    /// Stack size to trade.
    pub amount: u32,
    /// Asset id.
    #[serde(with = "string_or_number")]
    pub assetid: u64,
}

impl TradeAsset {
    /// A single (non-stacked) item.
    pub fn new(appid: AppId, contextid: ContextId, assetid: u64) -> Self {
        Self {
            appid,
            contextid,
            amount: 1,
            assetid,
        }
    }
}

/// A trade offer to send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeOffer {
    /// Trade partner.
    pub partner: Option<SteamId>,
    /// Items the bot gives.
    pub items_to_send: Vec<TradeAsset>,
    /// Items the bot receives.
    pub items_to_receive: Vec<TradeAsset>,
    /// Message shown to the partner.
    pub message: String,
}

impl TradeOffer {
    /// Start an offer to `partner`.
    pub fn new(partner: SteamId) -> Self {
        Self {
            partner: Some(partner),
            ..Default::default()
        }
    }

    /// Add an item the bot gives.
    pub fn send(mut self, asset: TradeAsset) -> Self {
        self.items_to_send.push(asset);
        self
    }

    /// Add an item the bot receives.
    pub fn receive(mut self, asset: TradeAsset) -> Self {
        self.items_to_receive.push(asset);
        self
    }

    /// Set the message shown to the partner.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The `json_tradeoffer` form value.
    pub fn to_json_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&TradeOfferPayload {
            newversion: true,
            version: 2,
            me: TradeOfferSide::new(&self.items_to_send),
            them: TradeOfferSide::new(&self.items_to_receive),
        })
    }
}

#[derive(Serialize)]
struct TradeOfferPayload<'a> {
    newversion: bool,
    version: u32,
    me: TradeOfferSide<'a>,
    them: TradeOfferSide<'a>,
}

#[derive(Serialize)]
struct TradeOfferSide<'a> {
    assets: &'a [TradeAsset],
    currency: [u8; 0],
    ready: bool,
}

impl<'a> TradeOfferSide<'a> {
    fn new(assets: &'a [TradeAsset]) -> Self {
        Self {
            assets,
            currency: [],
            ready: false,
        }
    }
}

/// Id of a created trade offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradeOfferId(pub String);

impl std::fmt::Display for TradeOfferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Response from the send trade offer endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendTradeOfferResponse {
    /// Created offer id; absent when Steam refused the offer.
    #[serde(default)]
    pub tradeofferid: Option<String>,
    /// Whether the offer waits on a mobile confirmation.
    #[serde(default)]
    pub needs_mobile_confirmation: bool,
    /// Failure text.
    #[serde(default)]
    pub strerror: Option<String>,
}

/// An item to list on the community market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketItem {
    /// Game id.
    pub appid: AppId,
    /// Inventory context.
    pub contextid: ContextId,
    /// Asset id.
    pub assetid: u64,
    /// Price the seller receives, in the wallet's smallest currency unit.
    pub price: u64,
    /// Wallet currency code.
    pub currency: String,
    /// Number of items from the stack.
    pub quantity: u32,
    /// Market hash name of the item.
    pub market_name: String,
}

/// Response from the sell item endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketListingResponse {
    /// Whether the listing was created.
    #[serde(default)]
    pub success: bool,
    /// Whether the listing needs a confirmation.
    #[serde(default, with = "int_bool")]
    pub requires_confirmation: bool,
    /// Failure text.
    #[serde(default)]
    pub message: Option<String>,
}

/// Device and account identifying a mobile authenticator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    /// Authenticator device id ("android:...").
    pub device_id: String,
    /// Bot account.
    pub steam_id: SteamId,
}

impl ConfirmationRequest {
    /// Create a new confirmation request.
    pub fn new(device_id: impl Into<String>, steam_id: SteamId) -> Self {
        Self {
            device_id: device_id.into(),
            steam_id,
        }
    }
}

/// Query parameters Steam expects on every confirmation call.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ConfirmationQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ck: Option<u64>,
    pub p: &'a str,
    pub a: SteamId,
    pub k: String,
    pub t: i64,
    pub m: &'static str,
    pub tag: &'static str,
}

/// Answer to a pending confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationOp {
    /// Accept the action.
    Allow,
    /// Decline the action.
    Cancel,
}

impl ConfirmationOp {
    /// Signature tag for this answer.
    pub fn tag(&self) -> ConfirmationTag {
        match self {
            ConfirmationOp::Allow => ConfirmationTag::Allow,
            ConfirmationOp::Cancel => ConfirmationTag::Cancel,
        }
    }
}

/// Pending confirmations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfirmationList {
    /// Whether the list was fetched.
    #[serde(default)]
    pub success: bool,
    /// Pending confirmations.
    #[serde(default)]
    pub conf: Vec<Confirmation>,
    /// Failure text.
    #[serde(default)]
    pub message: Option<String>,
}

/// A pending mobile confirmation.
#[derive(Debug, Clone, Deserialize)]
pub struct Confirmation {
    /// Confirmation id.
    #[serde(with = "string_or_number")]
    pub id: u64,
    /// Confirmation key to echo back when answering.
    #[serde(with = "string_or_number")]
    pub nonce: u64,
    /// Id of the trade offer or listing awaiting confirmation.
    #[serde(default, with = "string_or_number")]
    pub creator_id: u64,
    /// Numeric confirmation type.
    #[serde(rename = "type", default)]
    pub kind: u32,
    /// Confirmation type name.
    #[serde(default)]
    pub type_name: String,
    /// Headline shown in the app.
    #[serde(default)]
    pub headline: String,
    /// Summary lines.
    #[serde(default)]
    pub summary: Vec<String>,
}

/// Generic `{"success": ...}` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionResponse {
    /// Whether the action succeeded.
    #[serde(default)]
    pub success: bool,
    /// Failure text.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_offer_payload() {
        let offer = TradeOffer::new(SteamId::new(76561197960435530))
            .send(TradeAsset::new(730, 2, 27136573452))
            .message("gl hf");
        let payload = offer.to_json_payload().unwrap();
        assert_eq!(
            payload,
            r#"{"newversion":true,"version":2,"me":{"assets":[{"appid":730,"contextid":"2","amount":1,"assetid":"27136573452"}],"currency":[],"ready":false},"them":{"assets":[],"currency":[],"ready":false}}"#
        );
    }

    #[test]
    fn test_login_captcha_gid_number_or_string() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"success":false,"captcha_needed":true,"captcha_gid":-1}"#)
                .unwrap();
        assert_eq!(resp.captcha_gid(), "-1");

        let resp: LoginResponse =
            serde_json::from_str(r#"{"success":false,"captcha_gid":"4938"}"#).unwrap();
        assert_eq!(resp.captcha_gid(), "4938");
    }

    #[test]
    fn test_confirmation_list() {
        let json = r#"{"success":true,"conf":[{
            "id":"13146985551","nonce":"8837261133","creator_id":"6351349034",
            "type":2,"type_name":"Trade Offer","headline":"partner","summary":["AK-47"]
        }]}"#;
        let list: ConfirmationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.conf.len(), 1);
        assert_eq!(list.conf[0].nonce, 8837261133);
        assert_eq!(list.conf[0].kind, 2);
    }

    #[test]
    fn test_confirmation_op_tags() {
        assert_eq!(ConfirmationOp::Allow.tag().as_str(), "allow");
        assert_eq!(ConfirmationOp::Cancel.tag().as_str(), "cancel");
    }
}
