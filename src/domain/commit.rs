use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Number of commits requested from the default branch. No pagination.
pub const HISTORY_LIMIT: usize = 10;

const COMMIT_HISTORY_QUERY: &str = r#"
query GetCommits($owner: String!, $repo: String!) {
  repository(owner: $owner, name: $repo) {
    defaultBranchRef {
      target {
        ... on Commit {
          history(first: 10) {
            edges {
              node {
                oid
                messageHeadline
                committedDate
                author {
                  name
                  email
                }
              }
            }
          }
        }
      }
    }
  }
}
"#;

const EDGES_POINTER: &str = "/data/repository/defaultBranchRef/target/history/edges";

/// Inbound body for the commit-history route. Fields stay optional so a
/// missing value surfaces as a validation error instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitHistoryRequest {
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

impl CommitHistoryRequest {
    pub fn into_query(self) -> AppResult<CommitHistoryQuery> {
        let owner = non_empty(self.owner);
        let repo = non_empty(self.repo);
        match (owner, repo) {
            (Some(owner), Some(repo)) => Ok(CommitHistoryQuery::new(owner, repo)),
            _ => Err(AppError::InvalidRequest(
                "owner and repo are required".to_string(),
            )),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitHistoryQuery {
    query: &'static str,
    variables: QueryVariables,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryVariables {
    owner: String,
    repo: String,
}

impl CommitHistoryQuery {
    pub fn new(owner: String, repo: String) -> Self {
        Self {
            query: COMMIT_HISTORY_QUERY,
            variables: QueryVariables { owner, repo },
        }
    }

    pub fn slug(&self) -> String {
        format!("{}/{}", self.variables.owner, self.variables.repo)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitEdge {
    pub node: CommitNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitNode {
    pub oid: String,
    pub message_headline: String,
    pub committed_date: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Upstream response body kept exactly as received. The parsed form is only
/// for inspection; callers get the original text back.
#[derive(Debug, Clone)]
pub struct HistoryPayload {
    raw: String,
    parsed: Value,
}

impl HistoryPayload {
    pub fn parse(raw: String) -> Result<Self, serde_json::Error> {
        let parsed = serde_json::from_str(&raw)?;
        Ok(Self { raw, parsed })
    }

    pub fn value(&self) -> &Value {
        &self.parsed
    }

    pub fn into_raw(self) -> String {
        self.raw
    }
}

/// Reads the commit edges out of an upstream payload without altering it.
pub fn history_edges(payload: &Value) -> Option<Vec<CommitEdge>> {
    let edges = payload.pointer(EDGES_POINTER)?;
    serde_json::from_value(edges.clone()).ok()
}

/// GraphQL reports resolver failures with status 200 and an `errors` array.
pub fn graphql_errors(payload: &Value) -> Option<&Vec<Value>> {
    payload
        .get("errors")
        .and_then(Value::as_array)
        .filter(|errors| !errors.is_empty())
}
