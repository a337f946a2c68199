#[cfg(test)]
mod tests {

    mod slug_tests {
        use crate::error::WikiError;
        use crate::services::slug::{safe_slug, sanitize, validate_name};

        #[test]
        fn test_sanitize_basic() {
            assert_eq!(sanitize("My New Page"), "my-new-page");
        }

        #[test]
        fn test_sanitize_special_characters() {
            assert_eq!(sanitize("My New Page!"), "my-new-page");
        }

        #[test]
        fn test_sanitize_strips_underscores_and_dots() {
            assert_eq!(sanitize("a_b.c"), "abc");
        }

        #[test]
        fn test_sanitize_keeps_existing_hyphens_and_digits() {
            assert_eq!(sanitize("release-1.2 notes"), "release-12-notes");
        }

        #[test]
        fn test_sanitize_symbols_only_falls_back() {
            assert_eq!(sanitize("!!!"), "untitled");
            assert_eq!(sanitize("日本語"), "untitled");
            assert_eq!(sanitize(""), "untitled");
        }

        #[test]
        fn test_sanitize_idempotent() {
            for name in ["My New Page!", "  spaced  out  ", "ALLCAPS", "###", "a_b.c"] {
                let once = sanitize(name);
                assert_eq!(sanitize(&once), once, "not idempotent for {:?}", name);
            }
        }

        #[test]
        fn test_sanitize_caps_length() {
            let long = "a".repeat(300);
            assert_eq!(sanitize(&long).len(), 200);
        }

        #[test]
        fn test_validate_name_allows_safe_charset() {
            for name in ["abc", "a-b_c", "123", "my-page-2", ""] {
                assert!(validate_name(name).is_ok(), "expected ok for {:?}", name);
            }
        }

        #[test]
        fn test_validate_name_rejects_everything_else() {
            for name in ["My Page", "page!", "ABC", "a/b", "..", "a.b", "naïve"] {
                assert!(
                    matches!(validate_name(name), Err(WikiError::InvalidName { .. })),
                    "expected rejection for {:?}",
                    name
                );
            }
        }

        #[test]
        fn test_safe_slug_takes_base_name() {
            assert_eq!(safe_slug("my-page"), "my-page");
            assert_eq!(safe_slug("../../etc/passwd"), "passwd");
            assert_eq!(safe_slug("a\\b\\c"), "c");
            assert_eq!(safe_slug("trailing/"), "trailing");
        }

        #[test]
        fn test_safe_slug_rejects_dot_segments() {
            assert_eq!(safe_slug(".."), "");
            assert_eq!(safe_slug("."), "");
            assert_eq!(safe_slug(""), "");
            assert_eq!(safe_slug("///"), "");
        }
    }

    mod youtube_tests {
        use crate::services::youtube::{embed_url, extract};

        #[test]
        fn test_extract_watch_url() {
            let link = extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
            assert_eq!(link.video_id, "dQw4w9WgXcQ");
            assert_eq!(link.embed_url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
        }

        #[test]
        fn test_extract_all_shapes_share_one_embed_url() {
            let inputs = [
                "https://www.youtube.com/watch?v=abc123",
                "youtube.com/embed/abc123",
                "http://www.youtube.com/v/abc123",
                "https://youtu.be/abc123",
            ];
            for input in inputs {
                let link = extract(input).unwrap();
                assert_eq!(link.video_id, "abc123", "wrong ID for {:?}", input);
                assert_eq!(
                    link.embed_url, "https://www.youtube.com/embed/abc123",
                    "wrong embed URL for {:?}",
                    input
                );
            }
        }

        #[test]
        fn test_extract_first_match_wins() {
            let text = "see https://youtu.be/first and https://youtu.be/second";
            assert_eq!(extract(text).unwrap().video_id, "first");
        }

        #[test]
        fn test_extract_stops_at_query_noise() {
            let link = extract("https://www.youtube.com/watch?v=abc_12-3&t=42s").unwrap();
            assert_eq!(link.video_id, "abc_12-3");
        }

        #[test]
        fn test_extract_rejects_non_youtube() {
            assert!(extract("not a url").is_none());
            assert!(extract("https://vimeo.com/12345").is_none());
            assert!(extract("https://www.youtube.com/feed/subscriptions").is_none());
            assert!(extract("").is_none());
        }

        #[test]
        fn test_embed_url_is_canonical() {
            assert_eq!(embed_url("xyz"), "https://www.youtube.com/embed/xyz");
        }
    }

    mod vote_direction_tests {
        use crate::error::WikiError;
        use crate::models::VoteDirection;

        #[test]
        fn test_parse_known_actions() {
            assert_eq!("upvote".parse::<VoteDirection>().unwrap(), VoteDirection::Up);
            assert_eq!(
                "downvote".parse::<VoteDirection>().unwrap(),
                VoteDirection::Down
            );
        }

        #[test]
        fn test_parse_is_exact_match_only() {
            for action in ["sideways", "UPVOTE", "up", ""] {
                assert!(
                    matches!(
                        action.parse::<VoteDirection>(),
                        Err(WikiError::InvalidAction(_))
                    ),
                    "expected rejection for {:?}",
                    action
                );
            }
        }
    }
}
