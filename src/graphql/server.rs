use async_graphql::http::GraphiQLSource;
use async_graphql::{Request, Response as GraphQLResult, ServerError, Variables};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::{Json, Router, routing::get, serve};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;

use super::schema::BookshelfSchema;

/// Query-string form of a GraphQL-over-HTTP GET request.
#[derive(Deserialize)]
struct GetParams {
    query: Option<String>,
    /// JSON-encoded variables object
    variables: Option<String>,
    #[serde(rename = "operationName")]
    operation_name: Option<String>,
}

async fn graphql_post(
    State(schema): State<BookshelfSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// GET handler: executes the query from the query string if one is given,
/// otherwise serves the GraphiQL console.
async fn graphql_get(
    State(schema): State<BookshelfSchema>,
    Query(params): Query<GetParams>,
) -> Response {
    let Some(query) = params.query else {
        return Html(GraphiQLSource::build().endpoint("/graphql").finish()).into_response();
    };

    let mut request = Request::new(query);
    if let Some(name) = params.operation_name {
        request = request.operation_name(name);
    }
    if let Some(raw) = params.variables {
        match serde_json::from_str(&raw) {
            Ok(value) => request = request.variables(Variables::from_json(value)),
            Err(err) => {
                let error = ServerError::new(format!("invalid variables: {err}"), None);
                return Json(GraphQLResult::from_errors(vec![error])).into_response();
            }
        }
    }

    Json(schema.execute(request).await).into_response()
}

/// Binds the schema to `/graphql` and serves until externally terminated.
pub async fn run_server(schema: BookshelfSchema, port: u16) -> Result<()> {
    let app = Router::new()
        .route("/graphql", get(graphql_get).post(graphql_post))
        .with_state(schema);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "GraphQL endpoint listening");
    serve(listener, app).await?;
    Ok(())
}
