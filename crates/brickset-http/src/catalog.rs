//! BrickSet catalog client.

use async_trait::async_trait;
use tracing::{debug, instrument};

use brickset_core::catalog::{Instructions, Review, Set, SetImage, Theme, YearCount};
use brickset_core::error::AuthError;
use brickset_core::traits::Catalog;
use brickset_core::{
    ApiKey, ApiUrl, Credentials, Error, Result, SetQuery, SetRef, UserToken,
};

use crate::client::ApiClient;
use crate::endpoints::*;
use crate::session::UserSession;

/// Client for the BrickSet web API.
///
/// Catalog operations need only an API key; account operations go through
/// a [`UserSession`], obtained from [`BricksetClient::login`].
///
/// # Example
///
/// ```no_run
/// use brickset_core::{ApiKey, SetQuery};
/// use brickset_core::traits::Catalog;
/// use brickset_http::BricksetClient;
///
/// # async fn example() -> brickset_core::Result<()> {
/// let client = BricksetClient::new(ApiKey::new("your-key"));
/// let sets = client
///     .search_sets(&SetQuery::new().theme("The Hobbit").year(2012u16))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BricksetClient {
    client: ApiClient,
}

impl BricksetClient {
    /// Create a client for the default API URL.
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_url(ApiUrl::default(), api_key)
    }

    /// Create a client for a specific API base URL.
    pub fn with_url(base: ApiUrl, api_key: ApiKey) -> Self {
        Self {
            client: ApiClient::new(base, api_key),
        }
    }

    /// Returns the API base URL.
    pub fn url(&self) -> &ApiUrl {
        self.client.base()
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.client
    }

    /// Log in and obtain a session for account operations.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: Credentials) -> Result<UserSession> {
        debug!(username = credentials.username(), "logging in");

        let form = vec![
            ("username", credentials.username().to_string()),
            ("password", credentials.password().to_string()),
        ];

        let response: LoginResponse =
            self.client
                .procedure(LOGIN, form)
                .await
                .map_err(|err| match err {
                    Error::Api(api) => AuthError::LoginRejected(
                        api.message.unwrap_or_else(|| format!("HTTP {}", api.status)),
                    )
                    .into(),
                    other => other,
                })?;

        let hash = response
            .hash
            .ok_or_else(|| AuthError::LoginRejected("no token in response".to_string()))?;

        Ok(UserSession::new(self.clone(), UserToken::new(hash)))
    }

    /// Validate a user token against the API.
    #[instrument(skip(self, token))]
    pub async fn check_token(&self, token: &UserToken) -> Result<()> {
        let form = vec![("userHash", token.as_str().to_string())];

        let _: StatusOnlyResponse = self
            .client
            .procedure(CHECK_USER_HASH, form)
            .await
            .map_err(|err| match err {
                Error::Api(api) => AuthError::TokenRejected(
                    api.message.unwrap_or_else(|| format!("HTTP {}", api.status)),
                )
                .into(),
                other => other,
            })?;

        Ok(())
    }

    /// Download a file (set imagery) from an arbitrary URL.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.client.download(url).await
    }

    /// Fetch one page of a set query.
    #[instrument(skip(self, query, user_hash))]
    pub(crate) async fn sets_page(
        &self,
        query: &SetQuery,
        scope: Option<(bool, bool)>,
        page: u32,
        user_hash: &str,
    ) -> Result<SetsResponse> {
        let mut params = SetParams::from_query(query, page);
        if let Some((owned, wanted)) = scope {
            params = params.scoped(owned, wanted);
        }

        let form = vec![
            ("params", serde_json::to_string(&params)?),
            ("userHash", user_hash.to_string()),
        ];

        self.client.procedure(GET_SETS, form).await
    }

    /// Run a set query to exhaustion, accumulating pages until the
    /// reported match count is satisfied.
    pub(crate) async fn search_sets_with(
        &self,
        query: &SetQuery,
        scope: Option<(bool, bool)>,
        user_hash: &str,
    ) -> Result<Vec<Set>> {
        let mut sets: Vec<Set> = Vec::new();
        let mut page = 1;

        loop {
            let response = self.sets_page(query, scope, page, user_hash).await?;
            let fetched = response.sets.len();
            sets.extend(response.sets.into_iter().map(Set::from));

            if response.matches as usize <= sets.len() {
                break;
            }

            // The server claims more matches but returned an empty page;
            // no further page will change that.
            if fetched == 0 {
                debug!(
                    matches = response.matches,
                    returned = sets.len(),
                    "match count not satisfied by returned pages"
                );
                break;
            }

            page += 1;
        }

        Ok(sets)
    }
}

#[async_trait]
impl Catalog for BricksetClient {
    async fn search_sets(&self, query: &SetQuery) -> Result<Vec<Set>> {
        self.search_sets_with(query, None, "").await
    }

    async fn get_set(&self, set: &SetRef) -> Result<Option<Set>> {
        let query = match set {
            SetRef::Id(id) => SetQuery::new().set_id(*id),
            SetRef::Number(number) => SetQuery::new().set_number(number.clone()),
        };

        let response = self.sets_page(&query, None, 1, "").await?;
        Ok(response.sets.into_iter().next().map(Set::from))
    }

    async fn set_instructions(&self, set: &SetRef) -> Result<Vec<Instructions>> {
        let set_id = match set {
            SetRef::Id(id) => *id,
            SetRef::Number(_) => match self.get_set(set).await? {
                Some(found) => found.set_id,
                None => return Ok(Vec::new()),
            },
        };

        let response: InstructionsResponse = self
            .client
            .query(GET_INSTRUCTIONS, &SetIdQuery { set_id })
            .await?;

        Ok(response
            .instructions
            .into_iter()
            .map(|row| Instructions::from_description(row.description, row.url))
            .collect())
    }

    async fn set_images(&self, set_id: u32) -> Result<Vec<SetImage>> {
        let response: ImagesResponse = self
            .client
            .query(GET_ADDITIONAL_IMAGES, &SetIdQuery { set_id })
            .await?;

        Ok(response
            .additional_images
            .into_iter()
            .map(SetImage::from)
            .collect())
    }

    async fn set_reviews(&self, set_id: u32) -> Result<Vec<Review>> {
        let response: ReviewsResponse = self
            .client
            .query(GET_REVIEWS, &SetIdQuery { set_id })
            .await?;

        Ok(response.reviews.into_iter().map(Review::from).collect())
    }

    async fn themes(&self) -> Result<Vec<Theme>> {
        let response: ThemesResponse = self.client.query(GET_THEMES, &NoParams {}).await?;
        Ok(response.themes.into_iter().map(Theme::from).collect())
    }

    async fn subthemes(&self, theme: &str) -> Result<Vec<Theme>> {
        let form = vec![("Theme", theme.to_string())];

        let response: SubthemesResponse = self.client.procedure(GET_SUBTHEMES, form).await?;

        // The API pads the list with a placeholder row for sets that have
        // no sub-theme.
        Ok(response
            .subthemes
            .into_iter()
            .filter(|row| row.subtheme.as_deref() != Some("{None}"))
            .map(Theme::from)
            .collect())
    }

    async fn theme_years(&self, theme: Option<&str>) -> Result<Vec<YearCount>> {
        let form = vec![("Theme", theme.unwrap_or_default().to_string())];

        let response: YearsResponse = self.client.procedure(GET_YEARS, form).await?;
        Ok(response.years.into_iter().map(YearCount::from).collect())
    }
}
