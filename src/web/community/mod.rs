//! Community actions: login, friends, trade offers, market and confirmations.
//!
//! Write actions are form posts that need the session id of a logged-in
//! session; configure it with [`SteamWebClientBuilder::session_id`](crate::web::SteamWebClientBuilder::session_id).

mod types;

pub use types::*;

use crate::auth::{ConfirmationTag, Credentials};
use crate::error::{ApiError, SteamError};
use crate::types::SteamId;
use crate::web::SteamWebClient;
use crate::web::endpoints::community;

/// Confirmation client type reported to Steam.
const CONFIRMATION_CLIENT: &str = "react";

impl SteamWebClient {
    /// Log in with a password, adding a Steam Guard code when a guard is configured.
    ///
    /// The code is generated from the current time at the moment of the call.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), SteamError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            username: &'a str,
            password: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            twofactorcode: Option<String>,
        }

        let twofactorcode = self.guard().map(|guard| guard.login_code()).transpose()?;
        let params = Params {
            username: &credentials.username,
            password: credentials.expose_password(),
            twofactorcode,
        };

        let response: LoginResponse = self.community_post_form(community::DO_LOGIN, &params).await?;
        if !response.success {
            if response.requires_twofactor {
                return Err(SteamError::TwoFactorRequired);
            }
            if response.captcha_needed {
                return Err(SteamError::CaptchaRequired {
                    gid: response.captcha_gid(),
                });
            }
            return Err(SteamError::LoginFailed(response.message));
        }

        tracing::info!(username = %credentials.username, "logged in");
        Ok(())
    }

    /// Send a friend request.
    pub async fn add_friend(&self, steam_id: SteamId) -> Result<(), SteamError> {
        self.friend_action(community::ADD_FRIEND, steam_id).await?;
        tracing::info!(%steam_id, "friend request sent");
        Ok(())
    }

    /// Remove a friend.
    pub async fn remove_friend(&self, steam_id: SteamId) -> Result<(), SteamError> {
        self.friend_action(community::REMOVE_FRIEND, steam_id).await?;
        tracing::info!(%steam_id, "friend removed");
        Ok(())
    }

    /// Accept a pending friend request.
    pub async fn accept_friend_request(&self, steam_id: SteamId) -> Result<(), SteamError> {
        self.friend_action(community::ACCEPT_FRIEND, steam_id).await?;
        tracing::info!(%steam_id, "friend request accepted");
        Ok(())
    }

    async fn friend_action(&self, path: &str, steam_id: SteamId) -> Result<(), SteamError> {
        #[derive(serde::Serialize)]
        struct Params {
            steamid: SteamId,
        }
        // These endpoints answer with HTML or JSON depending on the account;
        // only the status is meaningful.
        self.session_post_text(path, &Params { steamid: steam_id })
            .await
            .map(|_| ())
    }

    /// Send a trade offer.
    ///
    /// Offers that give items away usually need a mobile confirmation
    /// afterwards (see [`SteamWebClient::respond_to_confirmation`]).
    pub async fn send_trade_offer(&self, offer: &TradeOffer) -> Result<TradeOfferId, SteamError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            partner: SteamId,
            tradeoffermessage: &'a str,
            json_tradeoffer: String,
        }

        let partner = offer
            .partner
            .ok_or_else(|| SteamError::Config("trade offer has no partner".to_string()))?;
        let params = Params {
            partner,
            tradeoffermessage: &offer.message,
            json_tradeoffer: offer.to_json_payload()?,
        };

        let response: SendTradeOfferResponse =
            self.session_post(community::SEND_TRADE_OFFER, &params).await?;
        let id = response.tradeofferid.ok_or_else(|| {
            SteamError::Api(ApiError::new(
                "tradeoffer",
                response
                    .strerror
                    .unwrap_or_else(|| "no trade offer id in response".to_string()),
            ))
        })?;

        tracing::info!(%partner, tradeofferid = %id, "trade offer sent");
        Ok(TradeOfferId(id))
    }

    /// List an item on the community market.
    pub async fn list_market_item(
        &self,
        item: &MarketItem,
    ) -> Result<MarketListingResponse, SteamError> {
        let response: MarketListingResponse =
            self.session_post(community::SELL_ITEM, item).await?;
        if !response.success {
            return Err(SteamError::Api(ApiError::new(
                "sellitem",
                response
                    .message
                    .unwrap_or_else(|| "listing rejected".to_string()),
            )));
        }

        tracing::info!(
            market_name = %item.market_name,
            assetid = item.assetid,
            price = item.price,
            "market item listed"
        );
        Ok(response)
    }

    /// List pending mobile confirmations.
    ///
    /// Requires a guard with an identity secret.
    pub async fn get_confirmations(
        &self,
        request: &ConfirmationRequest,
    ) -> Result<ConfirmationList, SteamError> {
        let query = self.confirmation_query(request, ConfirmationTag::Conf)?;
        let list: ConfirmationList = self.community_get(community::CONFIRMATIONS, &query).await?;
        if !list.success {
            return Err(SteamError::Api(ApiError::new(
                "mobileconf",
                list.message
                    .unwrap_or_else(|| "confirmation list unavailable".to_string()),
            )));
        }
        Ok(list)
    }

    /// Accept or cancel a pending mobile confirmation.
    ///
    /// Requires a guard with an identity secret.
    pub async fn respond_to_confirmation(
        &self,
        request: &ConfirmationRequest,
        confirmation: &Confirmation,
        op: ConfirmationOp,
    ) -> Result<(), SteamError> {
        let mut query = self.confirmation_query(request, op.tag())?;
        query.op = Some(op.tag().as_str());
        query.cid = Some(confirmation.id);
        query.ck = Some(confirmation.nonce);

        let response: ActionResponse = self
            .community_get(community::CONFIRMATION_OP, &query)
            .await?;
        if !response.success {
            return Err(SteamError::Api(ApiError::new(
                "mobileconf",
                response
                    .message
                    .unwrap_or_else(|| format!("could not {} confirmation", op.tag())),
            )));
        }

        tracing::info!(id = confirmation.id, op = %op.tag(), "confirmation answered");
        Ok(())
    }

    fn confirmation_query<'a>(
        &self,
        request: &'a ConfirmationRequest,
        tag: ConfirmationTag,
    ) -> Result<ConfirmationQuery<'a>, SteamError> {
        let (time, key) = self.require_guard()?.confirmation_key_now(tag)?;
        Ok(ConfirmationQuery {
            op: None,
            cid: None,
            ck: None,
            p: &request.device_id,
            a: request.steam_id,
            k: key,
            t: time,
            m: CONFIRMATION_CLIENT,
            tag: tag.as_str(),
        })
    }
}
