//! A serverless function entry point built on funcrouter.
//!
//! `cargo run --example function -- GET /users/42 [api-key]`
//!
//! The identity service is configured from `APPWRITE_FUNCTION_API_ENDPOINT`,
//! `APPWRITE_FUNCTION_PROJECT_ID` and `APPWRITE_FUNCTION_API_KEY`. A request's
//! `x-appwrite-key` header takes precedence over the key from the environment.

use funcrouter::{RequestContext, Response, ResponseWriter, Router};
use http::{header::HeaderName, HeaderValue, Method, StatusCode};
use serde::Serialize;
use serde_json::json;
use std::{collections::HashMap, sync::Arc};

#[derive(Debug, Clone, Serialize)]
struct User {
    id: String,
    name: String,
}

/// Connection settings for the identity service
#[derive(Debug, Clone, Default)]
struct Client {
    endpoint: Option<String>,
    project: Option<String>,
    key: Option<String>,
}

impl Client {
    fn from_env() -> Self {
        Self {
            endpoint: std::env::var("APPWRITE_FUNCTION_API_ENDPOINT").ok(),
            project: std::env::var("APPWRITE_FUNCTION_PROJECT_ID").ok(),
            key: std::env::var("APPWRITE_FUNCTION_API_KEY").ok(),
        }
    }

    /// a request-scoped client, preferring `key` over the configured one
    fn with_key(&self, key: Option<&str>) -> Self {
        Self {
            key: key.map(String::from).or_else(|| self.key.clone()),
            ..self.clone()
        }
    }
}

/// Stands in for the identity lookup service
#[derive(Debug, Default)]
struct Users {
    client: Client,
    directory: HashMap<String, User>,
}

impl Users {
    async fn get(&self, client: &Client, id: &str) -> Result<User, String> {
        log::debug!(
            "looking up user {id:?} at {} for project {}",
            client.endpoint.as_deref().unwrap_or("<unset>"),
            client.project.as_deref().unwrap_or("<unset>"),
        );
        if client.key.is_none() {
            return Err("missing API key".into());
        }

        self.directory
            .get(id)
            .cloned()
            .ok_or_else(|| format!("user {id:?} could not be found"))
    }
}

fn router(users: Arc<Users>) -> Result<Router, funcrouter::PatternError> {
    let mut router = Router::builder();

    router.get("/ping", |_: RequestContext, res: ResponseWriter| async move {
        res.json(json!({ "message": "Pong" }))
    })?;

    router.get("/users/*id", move |req: RequestContext, res: ResponseWriter| {
        let users = Arc::clone(&users);
        async move {
            let client = users.client.with_key(req.header("x-appwrite-key"));
            let id = req.param("id").unwrap_or_default();
            match users.get(&client, id).await {
                Ok(user) => res.json(user),
                Err(error) => {
                    log::error!("could not get user: {error}");
                    res.status(StatusCode::INTERNAL_SERVER_ERROR)
                        .json(json!({ "error": error }))
                }
            }
        }
    })?;

    router.all("/*splat", |req: RequestContext, res: ResponseWriter| async move {
        res.json(json!({ "message": "Not Found", "splat": req.param("splat") }))
    })?;

    Ok(router.build())
}

async fn function(router: &Router, req: RequestContext) -> Response {
    log::info!("path: {}", req.path());
    router.handle(req).await
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut users = Users {
        client: Client::from_env(),
        ..Users::default()
    };
    users.directory.insert(
        "42".into(),
        User {
            id: "42".into(),
            name: "Ada".into(),
        },
    );
    let router = router(Arc::new(users))?;
    println!("routes: {:#?}", router.routes());

    let mut args = std::env::args().skip(1);
    let method: Method = args.next().unwrap_or_else(|| "GET".into()).parse()?;
    let path = args.next().unwrap_or_else(|| "/ping".into());
    let mut request = RequestContext::new(method, path);
    if let Some(key) = args.next() {
        request = request.with_header(
            HeaderName::from_static("x-appwrite-key"),
            HeaderValue::from_str(&key)?,
        );
    }

    let response = futures::executor::block_on(function(&router, request));
    println!("{}", response.status());
    println!("{}", String::from_utf8_lossy(&response.into_bytes()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(key: Option<&str>) -> Arc<Users> {
        let mut users = Users {
            client: Client {
                key: key.map(String::from),
                ..Client::default()
            },
            ..Users::default()
        };
        users.directory.insert(
            "42".into(),
            User {
                id: "42".into(),
                name: "Ada".into(),
            },
        );
        Arc::new(users)
    }

    fn lookup(router: &Router, key: Option<&'static str>) -> Response {
        let mut request = RequestContext::new(Method::GET, "/users/42");
        if let Some(key) = key {
            request = request.with_header(
                HeaderName::from_static("x-appwrite-key"),
                HeaderValue::from_static(key),
            );
        }
        futures::executor::block_on(function(router, request))
    }

    #[test]
    fn request_key_overrides_configured_key() {
        let unkeyed = router(users(None)).unwrap();
        let response = lookup(&unkeyed, None);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json(),
            Some(&json!({ "error": "missing API key" }))
        );

        let response = lookup(&unkeyed, Some("request-key"));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.json().unwrap()["name"], "Ada");

        let keyed = router(users(Some("env-key"))).unwrap();
        assert_eq!(lookup(&keyed, None).status(), StatusCode::OK);
    }

    #[test]
    fn with_key_falls_back_to_configured_key() {
        let client = Client {
            key: Some("env-key".into()),
            ..Client::default()
        };
        assert_eq!(client.with_key(None).key.as_deref(), Some("env-key"));
        assert_eq!(client.with_key(Some("header")).key.as_deref(), Some("header"));
    }
}
