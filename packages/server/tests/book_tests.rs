//! Catalog operations and their access rules through the GraphQL schema.

mod common;

use crate::common::{create_test_book, MemoryHarness, CREATE_BOOK, LIST_BOOKS};
use catalog_core::common::{BookId, Identity, Profile, Role, UserId};

fn admin() -> Identity {
    Identity::authenticated(UserId::new(), "alice@example.com".into(), Role::Admin)
}

fn user() -> Identity {
    Identity::authenticated(UserId::new(), "bob@example.com".into(), Role::User)
}

const UPDATE_BOOK: &str = r#"
    mutation UpdateBook($id: ID!, $title: String, $year: String) {
        updateBook(input: { id: $id, title: $title, year: $year }) {
            id
            title
            author
            year
            createdOn
            updatedOn
        }
    }
"#;

const DELETE_BOOK: &str = r#"
    mutation DeleteBook($id: ID!) {
        deleteBook(id: $id)
    }
"#;

#[tokio::test]
async fn admin_creates_and_everyone_reads() {
    let harness = MemoryHarness::new();

    let data = harness
        .graphql_as(admin())
        .query_with_vars(
            CREATE_BOOK,
            vars!("title" => "X", "author" => "Y", "year" => "2020"),
        )
        .await;
    assert_eq!(data["createBook"]["title"], "X");
    assert_eq!(data["createBook"]["year"], "2020");
    assert_eq!(data["createBook"]["createdOn"], data["createBook"]["updatedOn"]);

    for client in [harness.graphql(), harness.graphql_as(user())] {
        let data = client.query(LIST_BOOKS).await;
        assert_eq!(data["listBooks"]["docs"][0]["title"], "X");
    }
}

#[tokio::test]
async fn non_admins_cannot_create_books() {
    let harness = MemoryHarness::new();

    for client in [
        harness.graphql(),
        harness.graphql_as(user()),
        harness.graphql_as(Identity::fallback(Profile::User)),
    ] {
        let result = client
            .execute_with_vars(
                CREATE_BOOK,
                vars!("title" => "X", "author" => "Y", "year" => "2020"),
            )
            .await;
        assert_eq!(result.code(), Some("PERMISSION_DENIED"));
        assert_eq!(result.errors, vec!["Permission denied: cannot create Book"]);
    }

    assert_eq!(harness.test_deps.store.book_count(), 0);
}

#[tokio::test]
async fn list_books_in_creation_order_with_limit() {
    let harness = MemoryHarness::new();
    for title in ["First", "Second", "Third"] {
        create_test_book(&harness.deps, title).await.unwrap();
    }

    let data = harness
        .graphql()
        .query("{ listBooks(limit: 2) { docs { title } } }")
        .await;

    let titles: Vec<&str> = data["listBooks"]["docs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);

    let result = harness
        .graphql()
        .execute("{ listBooks(limit: -1) { docs { title } } }")
        .await;
    assert_eq!(result.code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn get_book_returns_null_for_unknown_id() {
    let harness = MemoryHarness::new();
    let book = create_test_book(&harness.deps, "Dune").await.unwrap();

    let query = r#"query Get($id: ID!) { getBook(id: $id) { title } }"#;

    let data = harness
        .graphql()
        .query_with_vars(query, vars!("id" => book.id.to_string()))
        .await;
    assert_eq!(data["getBook"]["title"], "Dune");

    let data = harness
        .graphql()
        .query_with_vars(query, vars!("id" => BookId::new().to_string()))
        .await;
    assert!(data["getBook"].is_null());
}

#[tokio::test]
async fn update_book_changes_only_provided_fields() {
    let harness = MemoryHarness::new();
    let book = create_test_book(&harness.deps, "Dune").await.unwrap();

    let data = harness
        .graphql_as(admin())
        .query_with_vars(
            UPDATE_BOOK,
            vars!("id" => book.id.to_string(), "year" => "1965"),
        )
        .await;

    assert_eq!(data["updateBook"]["id"], book.id.to_string());
    assert_eq!(data["updateBook"]["title"], "Dune");
    assert_eq!(data["updateBook"]["author"], "Test Author");
    assert_eq!(data["updateBook"]["year"], "1965");
    assert_eq!(data["updateBook"]["createdOn"], book.created_on.to_rfc3339());
}

#[tokio::test]
async fn update_book_as_user_is_denied() {
    let harness = MemoryHarness::new();
    let book = create_test_book(&harness.deps, "Dune").await.unwrap();

    let result = harness
        .graphql_as(user())
        .execute_with_vars(
            UPDATE_BOOK,
            vars!("id" => book.id.to_string(), "title" => "Changed"),
        )
        .await;

    assert_eq!(result.code(), Some("PERMISSION_DENIED"));
}

#[tokio::test]
async fn delete_unknown_book_is_not_found_and_count_unchanged() {
    let harness = MemoryHarness::new();
    create_test_book(&harness.deps, "Dune").await.unwrap();

    let result = harness
        .graphql_as(admin())
        .execute_with_vars(DELETE_BOOK, vars!("id" => BookId::new().to_string()))
        .await;

    assert_eq!(result.code(), Some("NOT_FOUND"));
    assert_eq!(harness.test_deps.store.book_count(), 1);
}

#[tokio::test]
async fn delete_book_removes_it() {
    let harness = MemoryHarness::new();
    let book = create_test_book(&harness.deps, "Dune").await.unwrap();

    let data = harness
        .graphql_as(admin())
        .query_with_vars(DELETE_BOOK, vars!("id" => book.id.to_string()))
        .await;

    assert_eq!(data["deleteBook"], true);
    assert_eq!(harness.test_deps.store.book_count(), 0);
}

#[tokio::test]
async fn storage_failures_carry_storage_code() {
    let harness = MemoryHarness::new();
    harness.test_deps.store.fail_with("connection reset by peer");

    let result = harness.graphql().execute(LIST_BOOKS).await;

    assert_eq!(result.code(), Some("STORAGE_ERROR"));
    assert!(result.errors[0].contains("connection reset by peer"));
}
