/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Endpoint descriptor table
//!
//! Every remote operation is described once here: method, path template and
//! the status that marks success. Service implementations turn a descriptor
//! into an [`ApiRequest`] and hand it to the client core.

use crate::error::AppError;
use crate::model::requests::ApiRequest;
use reqwest::{Method, StatusCode};

/// Description of one remote operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name, used in logs
    pub name: &'static str,
    /// HTTP method
    pub method: Method,
    /// Path template; `{name}` placeholders are filled in order
    pub path: &'static str,
    /// Status the service answers on success
    pub expected: StatusCode,
}

impl Endpoint {
    /// Fills the path template with `params`, in order of appearance
    ///
    /// Each parameter becomes exactly one path segment, so empty values and
    /// values containing `/`, `?` or `#` are rejected.
    pub fn render(&self, params: &[&str]) -> Result<String, AppError> {
        let mut path = String::with_capacity(self.path.len() + 16);
        let mut rest = self.path;
        let mut params = params.iter();

        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let placeholder = &rest[start + 1..start + len];
            let Some(value) = params.next() else {
                return Err(AppError::InvalidInput(format!(
                    "{}: missing value for {{{placeholder}}}",
                    self.name
                )));
            };
            validate_segment(placeholder, value)?;
            path.push_str(&rest[..start]);
            path.push_str(value);
            rest = &rest[start + len + 1..];
        }
        path.push_str(rest);

        if params.next().is_some() {
            return Err(AppError::InvalidInput(format!(
                "{}: too many path parameters",
                self.name
            )));
        }
        Ok(path)
    }

    /// Builds the request envelope for this operation
    pub fn request(&self, params: &[&str]) -> Result<ApiRequest, AppError> {
        Ok(ApiRequest::new(self.method.clone(), self.render(params)?).expect_status(self.expected))
    }
}

fn validate_segment(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{name} must not be empty")));
    }
    if value.contains(['/', '?', '#']) {
        return Err(AppError::InvalidInput(format!(
            "{name} must be a single path segment: {value:?}"
        )));
    }
    Ok(())
}

macro_rules! endpoint {
    ($ident:ident, $name:literal, $method:ident, $path:literal, $status:ident) => {
        #[doc = concat!("`", stringify!($method), " ", $path, "`")]
        pub const $ident: Endpoint = Endpoint {
            name: $name,
            method: Method::$method,
            path: $path,
            expected: StatusCode::$status,
        };
    };
}

endpoint!(LOGIN, "login", POST, "/auth/login", OK);
endpoint!(SIGNUP, "signup", POST, "/auth/signup", CREATED);
endpoint!(PROFILE, "get_profile", GET, "/api/user/profile", OK);
endpoint!(USAGE, "get_usage", GET, "/api/usage", OK);

endpoint!(CREATE_API_KEY, "generate_api_key", POST, "/api/keys", CREATED);
endpoint!(LIST_API_KEYS, "list_api_keys", GET, "/api/keys", OK);
endpoint!(REVOKE_API_KEY, "revoke_api_key", DELETE, "/api/keys/{id}", OK);

endpoint!(SHORTEN, "shorten", POST, "/api/shorten", CREATED);
endpoint!(LIST_LINKS, "list_links", GET, "/api/links", OK);
endpoint!(GET_LINK, "get_link", GET, "/api/links/{slug}", OK);
endpoint!(UPDATE_LINK, "update_link", PUT, "/api/links/{slug}", OK);
endpoint!(DELETE_LINK, "delete_link", DELETE, "/api/links/{slug}", OK);
endpoint!(MOVE_LINK, "move_link_to_group", PUT, "/api/links/{slug}/group", OK);
endpoint!(LINK_QR, "generate_qr", GET, "/api/links/{slug}/qr", OK);

endpoint!(IMPORT_LINKS, "import_links", POST, "/api/import/links", OK);
endpoint!(EXPORT_LINKS, "export_links", GET, "/api/export/links", OK);
endpoint!(BULK_GROUP, "bulk_move_to_group", POST, "/api/links/bulk-group", OK);

endpoint!(LIST_GROUPS, "list_groups", GET, "/api/groups", OK);
endpoint!(CREATE_GROUP, "create_group", POST, "/api/groups", CREATED);
endpoint!(GET_GROUP, "get_group", GET, "/api/groups/{id}", OK);
endpoint!(UPDATE_GROUP, "update_group", PUT, "/api/groups/{id}", OK);
endpoint!(DELETE_GROUP, "delete_group", DELETE, "/api/groups/{id}", OK);
endpoint!(ADD_GROUP_LINKS, "add_links_to_group", POST, "/api/groups/{id}/links", OK);
endpoint!(REMOVE_GROUP_LINKS, "remove_links_from_group", DELETE, "/api/groups/{id}/links", OK);

endpoint!(LINK_STATS, "get_stats", GET, "/api/stats/{slug}", OK);
endpoint!(LINK_ANALYTICS, "get_analytics", GET, "/api/analytics/{slug}", OK);
endpoint!(GROUP_ANALYTICS, "get_group_analytics", GET, "/api/groups/{id}/analytics", OK);
endpoint!(OVERVIEW_ANALYTICS, "get_overview_analytics", GET, "/api/analytics/overview", OK);
endpoint!(EXPORT_ANALYTICS, "export_analytics", GET, "/api/export/analytics/{slug}", OK);

endpoint!(GET_ROUTING, "get_routing", GET, "/api/links/{slug}/routing", OK);
endpoint!(SET_ROUTING, "set_routing", POST, "/api/links/{slug}/routing/{type}", OK);
endpoint!(DELETE_ROUTING, "delete_routing", DELETE, "/api/links/{slug}/routing", OK);

endpoint!(CREATE_AB_TEST, "create_ab_test", POST, "/api/links/{slug}/ab-test", OK);
endpoint!(GET_AB_TEST, "get_ab_results", GET, "/api/links/{slug}/ab-test", OK);
endpoint!(DELETE_AB_TEST, "delete_ab_test", DELETE, "/api/links/{slug}/ab-test", OK);

endpoint!(LIST_DOMAINS, "list_domains", GET, "/api/domains", OK);
endpoint!(ADD_DOMAIN, "add_domain", POST, "/api/domains", CREATED);
endpoint!(VERIFY_DOMAIN, "verify_domain", POST, "/api/domains/{id}/verify", OK);
endpoint!(DELETE_DOMAIN, "delete_domain", DELETE, "/api/domains/{id}", OK);

endpoint!(LIST_WEBHOOKS, "list_webhooks", GET, "/api/webhooks", OK);
endpoint!(CREATE_WEBHOOK, "create_webhook", POST, "/api/webhooks", CREATED);
endpoint!(DELETE_WEBHOOK, "delete_webhook", DELETE, "/api/webhooks/{id}", OK);

/// Every known endpoint
pub const ALL: &[Endpoint] = &[
    LOGIN,
    SIGNUP,
    PROFILE,
    USAGE,
    CREATE_API_KEY,
    LIST_API_KEYS,
    REVOKE_API_KEY,
    SHORTEN,
    LIST_LINKS,
    GET_LINK,
    UPDATE_LINK,
    DELETE_LINK,
    MOVE_LINK,
    LINK_QR,
    IMPORT_LINKS,
    EXPORT_LINKS,
    BULK_GROUP,
    LIST_GROUPS,
    CREATE_GROUP,
    GET_GROUP,
    UPDATE_GROUP,
    DELETE_GROUP,
    ADD_GROUP_LINKS,
    REMOVE_GROUP_LINKS,
    LINK_STATS,
    LINK_ANALYTICS,
    GROUP_ANALYTICS,
    OVERVIEW_ANALYTICS,
    EXPORT_ANALYTICS,
    GET_ROUTING,
    SET_ROUTING,
    DELETE_ROUTING,
    CREATE_AB_TEST,
    GET_AB_TEST,
    DELETE_AB_TEST,
    LIST_DOMAINS,
    ADD_DOMAIN,
    VERIFY_DOMAIN,
    DELETE_DOMAIN,
    LIST_WEBHOOKS,
    CREATE_WEBHOOK,
    DELETE_WEBHOOK,
];
