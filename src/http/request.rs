use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header::{
    HeaderMap as Headers,
    HeaderName,
    HeaderValue,
    AUTHORIZATION,
    CONTENT_LENGTH,
    CONTENT_TYPE,
    USER_AGENT,
};
use reqwest::{Client, RequestBuilder as ReqwestRequestBuilder, Url};
#[cfg(feature = "tracing_instrument")]
use tracing::instrument;

use super::routing::Route;
use super::{HttpError, LightMethod};
use crate::constants;
use crate::internal::prelude::*;

/// The header Discord reads the reason for an audit-logged action from.
const AUDIT_LOG_REASON: &str = "x-audit-log-reason";

pub struct RequestBuilder<'a> {
    body: Option<Vec<u8>>,
    headers: Option<Headers>,
    method: LightMethod,
    route: Route<'a>,
}

impl<'a> RequestBuilder<'a> {
    #[must_use]
    pub fn new(route: Route<'a>, method: LightMethod) -> Self {
        Self {
            body: None,
            headers: None,
            method,
            route,
        }
    }

    #[must_use]
    pub fn build(self) -> Request<'a> {
        Request::new(self)
    }

    #[must_use]
    pub fn body(mut self, body: Option<Vec<u8>>) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn headers(mut self, headers: Option<Headers>) -> Self {
        self.headers = headers;
        self
    }
}

#[derive(Clone, Debug)]
#[must_use]
pub struct Request<'a> {
    pub(super) body: Option<Vec<u8>>,
    pub(super) headers: Option<Headers>,
    pub(super) method: LightMethod,
    pub(super) route: Route<'a>,
}

impl<'a> Request<'a> {
    pub fn new(builder: RequestBuilder<'a>) -> Self {
        let RequestBuilder {
            body,
            headers,
            method,
            route,
        } = builder;

        Self {
            body,
            headers,
            method,
            route,
        }
    }

    /// Attaches the reason an action shows with in the guild's audit log.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidHeader`] if the encoded reason is not a valid header value,
    /// which cannot happen for percent-encoded input in practice.
    pub fn audit_log_reason(mut self, reason: Option<&str>) -> Result<Self> {
        if let Some(reason) = reason {
            let encoded = utf8_percent_encode(reason, NON_ALPHANUMERIC).to_string();
            let value = HeaderValue::from_str(&encoded).map_err(HttpError::InvalidHeader)?;

            self.headers
                .get_or_insert_with(Headers::new)
                .insert(HeaderName::from_static(AUDIT_LOG_REASON), value);
        }

        Ok(self)
    }

    #[cfg_attr(feature = "tracing_instrument", instrument(skip(token)))]
    pub fn build(
        self,
        client: &Client,
        token: &str,
        proxy: Option<&Url>,
    ) -> Result<ReqwestRequestBuilder> {
        let Request {
            body,
            headers: request_headers,
            method,
            route,
        } = self;

        let mut path = route.path();

        if let Some(proxy) = proxy {
            path = Cow::Owned(path.replace("https://discord.com/", proxy.as_str()));
        }

        let mut builder =
            client.request(method.reqwest_method(), Url::parse(&path).map_err(HttpError::Url)?);

        let mut headers = Headers::with_capacity(4);
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));
        headers
            .insert(AUTHORIZATION, HeaderValue::from_str(token).map_err(HttpError::InvalidHeader)?);

        // Discord will return a 400: Bad Request response if we set the content type header,
        // but don't give a body.
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let length = body
            .as_ref()
            .map(|b| HeaderValue::try_from(b.len().to_string()))
            .transpose()
            .map_err(HttpError::InvalidHeader)?;

        headers.insert(CONTENT_LENGTH, length.unwrap_or_else(|| HeaderValue::from_static("0")));

        if let Some(request_headers) = request_headers {
            headers.extend(request_headers);
        }

        if let Some(bytes) = body {
            builder = builder.body(bytes);
        }

        Ok(builder.headers(headers))
    }

    #[must_use]
    pub fn body_ref(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    #[must_use]
    pub fn headers_ref(&self) -> &Option<Headers> {
        &self.headers
    }

    #[must_use]
    pub fn audit_log_reason_ref(&self) -> Option<&HeaderValue> {
        self.headers.as_ref().and_then(|headers| headers.get(AUDIT_LOG_REASON))
    }

    #[must_use]
    pub fn method_ref(&self) -> LightMethod {
        self.method
    }

    #[must_use]
    pub fn route_ref(&self) -> &Route<'a> {
        &self.route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::GuildId;

    #[test]
    fn reason_is_percent_encoded() {
        let request = RequestBuilder::new(
            Route::GuildEmojis {
                guild_id: GuildId::new(424242),
            },
            LightMethod::Post,
        )
        .build()
        .audit_log_reason(Some("new emoji: caf\u{e9}"))
        .unwrap();

        assert_eq!(
            request.audit_log_reason_ref().and_then(|value| value.to_str().ok()),
            Some("new%20emoji%3A%20caf%C3%A9")
        );
    }

    #[test]
    fn headers_and_body() {
        let client = Client::new();
        let request = RequestBuilder::new(
            Route::GuildEmojis {
                guild_id: GuildId::new(424242),
            },
            LightMethod::Post,
        )
        .body(Some(b"{}".to_vec()))
        .build()
        .build(&client, "Bot token", None)
        .unwrap()
        .build()
        .unwrap();

        assert_eq!(*request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), "https://discord.com/api/v10/guilds/424242/emojis");
        assert_eq!(request.headers()[AUTHORIZATION], "Bot token");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()[CONTENT_LENGTH], "2");
    }
}
