//! Integration tests for flat-tree navigation
//!
//! Navigation never sees the parser: it works purely off the depth fields
//! and bookend flags of a finished token array. These tests pin down the
//! stop conditions and the duality between forward and backward walks.

use jsontok::{parse_str, Token, TokenCursor, TokenKind};

const DOC: &str = r#"{"a":111, "b":[222, true], "c":{}}"#;

fn cursor_at<'s, 'a>(tokens: &'s [Token<'a>], index: usize) -> TokenCursor<'s, 'a> {
    TokenCursor::new(tokens, index).expect("index in range")
}

// ============================================================================
// Basic Movement
// ============================================================================

#[test]
fn test_prev_next_are_inverse_in_the_interior() {
    let mut store = [Token::EMPTY; 16];
    let count = parse_str(DOC, store.as_mut_slice()).unwrap();
    let tokens = &store[..count];

    for index in 1..count - 1 {
        let cursor = cursor_at(tokens, index);
        assert_eq!(cursor.next().unwrap().prev().unwrap().index(), index);
        assert_eq!(cursor.prev().unwrap().next().unwrap().index(), index);
    }
}

#[test]
fn test_bookend_flags_stop_movement() {
    let mut store = [Token::EMPTY; 16];
    let count = parse_str(DOC, store.as_mut_slice()).unwrap();
    let tokens = &store[..count];

    assert!(cursor_at(tokens, 0).prev().is_none());
    assert!(cursor_at(tokens, count - 1).next().is_none());
}

#[test]
fn test_root_walks_back_to_the_first_token() {
    let mut store = [Token::EMPTY; 16];
    let count = parse_str(DOC, store.as_mut_slice()).unwrap();
    let tokens = &store[..count];

    for index in 0..count {
        let root = cursor_at(tokens, index).root().unwrap();
        assert_eq!(root.index(), 0);
        assert_eq!(root.token().kind(), TokenKind::Object);
    }
}

// ============================================================================
// Structure Queries
// ============================================================================

#[test]
fn test_parent_of_each_token() {
    let mut store = [Token::EMPTY; 16];
    let count = parse_str(DOC, store.as_mut_slice()).unwrap();
    let tokens = &store[..count];

    // DOC preorder: 0 object, 1 "a", 2 111, 3 "b", 4 array, 5 222, 6 true,
    // 7 "c", 8 {}.
    let expected_parents = [None, Some(0), Some(0), Some(0), Some(0), Some(4), Some(4), Some(0), Some(0)];
    for (index, expected) in expected_parents.iter().enumerate() {
        let parent = cursor_at(tokens, index).parent().map(|c| c.index());
        assert_eq!(parent, *expected, "parent of token {index}");
    }
}

#[test]
fn test_child_is_first_direct_child_only() {
    let mut store = [Token::EMPTY; 16];
    let count = parse_str(DOC, store.as_mut_slice()).unwrap();
    let tokens = &store[..count];

    assert_eq!(cursor_at(tokens, 0).child().unwrap().index(), 1);
    assert_eq!(cursor_at(tokens, 4).child().unwrap().index(), 5);
    // The empty object has no children, scalars neither.
    assert!(cursor_at(tokens, 8).child().is_none());
    assert!(cursor_at(tokens, 2).child().is_none());
    assert!(cursor_at(tokens, 6).child().is_none());
}

#[test]
fn test_sibling_walks() {
    let mut store = [Token::EMPTY; 16];
    let count = parse_str(DOC, store.as_mut_slice()).unwrap();
    let tokens = &store[..count];

    // Members of the root object, skipping the array's interior.
    let forward: Vec<usize> =
        std::iter::successors(Some(cursor_at(tokens, 1)), |c| c.next_sibling())
            .map(|c| c.index())
            .collect();
    assert_eq!(forward, vec![1, 2, 3, 4, 7, 8]);

    let backward: Vec<usize> =
        std::iter::successors(Some(cursor_at(tokens, 8)), |c| c.prev_sibling())
            .map(|c| c.index())
            .collect();
    assert_eq!(backward, vec![8, 7, 4, 3, 2, 1]);

    // First and last children have no sibling beyond the container edge.
    assert!(cursor_at(tokens, 1).prev_sibling().is_none());
    assert!(cursor_at(tokens, 8).next_sibling().is_none());
    assert!(cursor_at(tokens, 5).prev_sibling().is_none());
    assert!(cursor_at(tokens, 6).next_sibling().is_none());
}

#[test]
fn test_sibling_duality() {
    let mut store = [Token::EMPTY; 16];
    let count = parse_str(DOC, store.as_mut_slice()).unwrap();
    let tokens = &store[..count];

    for index in 0..count {
        let cursor = cursor_at(tokens, index);
        if let Some(prev) = cursor.prev_sibling() {
            assert_eq!(prev.next_sibling().unwrap().index(), index);
        }
        if let Some(next) = cursor.next_sibling() {
            assert_eq!(next.prev_sibling().unwrap().index(), index);
        }
        if let Some(child) = cursor.child() {
            assert_eq!(child.parent().unwrap().index(), index);
        }
    }
}

// ============================================================================
// Object Member Layout
// ============================================================================

#[test]
fn test_keys_sit_at_even_child_positions() {
    let mut store = [Token::EMPTY; 16];
    let count = parse_str(DOC, store.as_mut_slice()).unwrap();
    let tokens = &store[..count];

    let children: Vec<TokenCursor> =
        std::iter::successors(cursor_at(tokens, 0).child(), |c| c.next_sibling()).collect();
    assert_eq!(children.len(), 6);
    for (position, child) in children.iter().enumerate() {
        if position % 2 == 0 {
            assert_eq!(child.token().kind(), TokenKind::String, "child {position}");
        }
    }
}

#[test]
fn test_find_key_scans_members_only() {
    let mut store = [Token::EMPTY; 16];
    let count = parse_str(DOC, store.as_mut_slice()).unwrap();
    let tokens = &store[..count];
    let root = cursor_at(tokens, 0);

    assert_eq!(root.find_key("a").unwrap().index(), 1);
    assert_eq!(root.find_key("c").unwrap().index(), 7);
    assert_eq!(root.find_value("b").unwrap().token().slice(), "[222, true]");
    assert_eq!(root.find_value("c").unwrap().token().slice(), "{}");
    assert!(root.find_key("222").is_none());
    assert!(root.find_key("").is_none());

    // Values that happen to be strings are not keys.
    let mut kv_store = [Token::EMPTY; 8];
    let kv_count = parse_str(r#"{"k":"v"}"#, kv_store.as_mut_slice()).unwrap();
    let kv_root = cursor_at(&kv_store[..kv_count], 0);
    assert!(kv_root.find_key("v").is_none());
    assert_eq!(kv_root.find_value("k").unwrap().token().slice(), r#""v""#);
}

#[test]
fn test_navigation_on_single_token_parse() {
    let mut store = [Token::EMPTY; 2];
    let count = parse_str("true", store.as_mut_slice()).unwrap();
    let tokens = &store[..count];
    let only = cursor_at(tokens, 0);

    assert!(only.prev().is_none());
    assert!(only.next().is_none());
    assert!(only.parent().is_none());
    assert!(only.child().is_none());
    assert!(only.prev_sibling().is_none());
    assert!(only.next_sibling().is_none());
    assert_eq!(only.root().unwrap().index(), 0);
}

#[test]
fn test_absent_propagates_through_chains() {
    let mut store = [Token::EMPTY; 4];
    let count = parse_str("[1]", store.as_mut_slice()).unwrap();
    let tokens = &store[..count];

    let result = cursor_at(tokens, 0)
        .child()
        .and_then(|c| c.next_sibling())
        .and_then(|c| c.child())
        .and_then(|c| c.parent());
    assert!(result.is_none());
}
