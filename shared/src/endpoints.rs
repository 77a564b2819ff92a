use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Characters escaped in a single path segment (RFC 3986 unreserved stay as-is)
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode one path segment so opaque ids cannot alter the path
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owning ids of a category's question collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionScope<'a> {
    pub community_id: &'a str,
    pub level_id: &'a str,
    pub category_id: &'a str,
}

/// Every call the backend exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ListCommunities,
    GetCommunity(&'a str),
    CreateCommunity,
    UpdateCommunity(&'a str),
    DeleteCommunity(&'a str),

    GetLevel(&'a str),
    CreateLevel { community_id: &'a str },
    UpdateLevel(&'a str),
    DeleteLevel(&'a str),

    ListCategories { community_id: &'a str, level_id: &'a str },
    CreateCategory { level_id: &'a str },
    UpdateCategory(&'a str),
    DeleteCategory(&'a str),

    ListQuestions(QuestionScope<'a>),
    CreateQuestion(QuestionScope<'a>),
    UpdateQuestion { scope: QuestionScope<'a>, question_id: &'a str },
    DeleteQuestion(&'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> HttpMethod {
        use Endpoint::*;
        match self {
            ListCommunities | GetCommunity(_) | GetLevel(_) | ListCategories { .. }
            | ListQuestions(_) => HttpMethod::Get,
            CreateCommunity | CreateLevel { .. } | CreateCategory { .. } | CreateQuestion(_) => {
                HttpMethod::Post
            }
            UpdateCommunity(_) | UpdateLevel(_) | UpdateCategory(_) | UpdateQuestion { .. } => {
                HttpMethod::Put
            }
            DeleteCommunity(_) | DeleteLevel(_) | DeleteCategory(_) | DeleteQuestion(_) => {
                HttpMethod::Delete
            }
        }
    }

    /// Path relative to the API base URL, always starting with `/`
    pub fn path(&self) -> String {
        use Endpoint::*;
        match self {
            ListCommunities | CreateCommunity => join(&["community"], &[]),
            GetCommunity(id) | UpdateCommunity(id) | DeleteCommunity(id) => {
                join(&["community"], &[*id])
            }

            GetLevel(id) | UpdateLevel(id) | DeleteLevel(id) => join(&["level"], &[*id]),
            CreateLevel { community_id } => join(&["level"], &[*community_id]),

            ListCategories {
                community_id,
                level_id,
            } => join(&["category"], &[*community_id, *level_id]),
            CreateCategory { level_id } => join(&["category"], &[*level_id]),
            UpdateCategory(id) | DeleteCategory(id) => join(&["category"], &[*id]),

            ListQuestions(scope) | CreateQuestion(scope) => join(
                &["question"],
                &[scope.community_id, scope.level_id, scope.category_id],
            ),
            UpdateQuestion { scope, question_id } => join(
                &["question"],
                &[
                    scope.community_id,
                    scope.level_id,
                    scope.category_id,
                    *question_id,
                ],
            ),
            DeleteQuestion(id) => join(&["question"], &[*id]),
        }
    }
}

fn join(fixed: &[&str], ids: &[&str]) -> String {
    let mut path = String::new();
    for segment in fixed {
        path.push('/');
        path.push_str(segment);
    }
    for id in ids {
        path.push('/');
        path.push_str(&encode_segment(id));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCOPE: QuestionScope<'static> = QuestionScope {
        community_id: "c1",
        level_id: "l1",
        category_id: "k1",
    };

    #[test]
    fn test_community_endpoints() {
        assert_eq!(Endpoint::ListCommunities.path(), "/community");
        assert_eq!(Endpoint::CreateCommunity.method(), HttpMethod::Post);
        assert_eq!(Endpoint::UpdateCommunity("c1").path(), "/community/c1");
        assert_eq!(Endpoint::UpdateCommunity("c1").method(), HttpMethod::Put);
        assert_eq!(Endpoint::DeleteCommunity("c1").method(), HttpMethod::Delete);
        assert_eq!(Endpoint::GetCommunity("c1").method(), HttpMethod::Get);
    }

    #[test]
    fn test_level_create_uses_community_id() {
        let endpoint = Endpoint::CreateLevel { community_id: "c1" };
        assert_eq!(endpoint.path(), "/level/c1");
        assert_eq!(endpoint.method(), HttpMethod::Post);
        assert_eq!(Endpoint::GetLevel("l1").path(), "/level/l1");
    }

    #[test]
    fn test_category_paths() {
        let list = Endpoint::ListCategories {
            community_id: "c1",
            level_id: "l1",
        };
        assert_eq!(list.path(), "/category/c1/l1");
        assert_eq!(Endpoint::CreateCategory { level_id: "l1" }.path(), "/category/l1");
        assert_eq!(Endpoint::UpdateCategory("k1").path(), "/category/k1");
    }

    #[test]
    fn test_question_paths() {
        assert_eq!(Endpoint::ListQuestions(SCOPE).path(), "/question/c1/l1/k1");
        assert_eq!(Endpoint::CreateQuestion(SCOPE).method(), HttpMethod::Post);
        let update = Endpoint::UpdateQuestion {
            scope: SCOPE,
            question_id: "q1",
        };
        assert_eq!(update.path(), "/question/c1/l1/k1/q1");
        assert_eq!(update.method(), HttpMethod::Put);
        // delete addresses the question directly
        assert_eq!(Endpoint::DeleteQuestion("q1").path(), "/question/q1");
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        assert_eq!(Endpoint::GetLevel("a/b c").path(), "/level/a%2Fb%20c");
        assert_eq!(encode_segment("65f0-ab_c.d~e"), "65f0-ab_c.d~e");
    }
}
