use yew_router::prelude::*;

/// Screens addressable by URL, nested the way the data is
#[derive(Debug, Clone, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/community/:community_id")]
    Community { community_id: String },
    #[at("/community/:community_id/level/:level_id")]
    Level {
        community_id: String,
        level_id: String,
    },
    #[at("/community/:community_id/level/:level_id/category/:category_id")]
    Category {
        community_id: String,
        level_id: String,
        category_id: String,
    },
    #[at("/community/:community_id/level/:level_id/category/:category_id/question/:question_id")]
    Question {
        community_id: String,
        level_id: String,
        category_id: String,
        question_id: String,
    },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Route {
        Route::Question {
            community_id: "c1".to_string(),
            level_id: "l1".to_string(),
            category_id: "k1".to_string(),
            question_id: "q1".to_string(),
        }
    }

    #[test]
    fn test_recognize_home() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn test_recognize_nested_routes() {
        assert_eq!(
            Route::recognize("/community/c1"),
            Some(Route::Community {
                community_id: "c1".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/community/c1/level/l1"),
            Some(Route::Level {
                community_id: "c1".to_string(),
                level_id: "l1".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/community/c1/level/l1/category/k1"),
            Some(Route::Category {
                community_id: "c1".to_string(),
                level_id: "l1".to_string(),
                category_id: "k1".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/community/c1/level/l1/category/k1/question/q1"),
            Some(question())
        );
    }

    #[test]
    fn test_unknown_paths_not_found() {
        assert_eq!(Route::recognize("/communities"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/community"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/community/c1/category/k1"), Some(Route::NotFound));
    }

    #[test]
    fn test_round_trip() {
        let routes = vec![
            Route::Home,
            Route::Community {
                community_id: "65f0ab12".to_string(),
            },
            question(),
        ];
        for route in routes {
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }
    }

    #[test]
    fn test_to_path_nests_ids() {
        assert_eq!(
            question().to_path(),
            "/community/c1/level/l1/category/k1/question/q1"
        );
        assert_eq!(Route::NotFound.to_path(), "/404");
    }
}
