//! Channel registry behavior: idempotent adds and per-user reads

mod common;

use pretty_assertions::assert_eq;
use tunescout::get_connection;
use tunescout::storage::channels;

#[test]
fn get_channels_is_empty_for_unknown_user() {
    let (_dir, pool) = common::test_pool();
    let conn = get_connection(&pool).expect("get connection");

    let found = channels::get_channels(&conn, 42).expect("get channels");

    assert_eq!(found, Vec::<String>::new());
}

#[test]
fn add_channel_is_idempotent() {
    let (_dir, pool) = common::test_pool();
    let conn = get_connection(&pool).expect("get connection");

    for _ in 0..3 {
        channels::add_channel(&conn, 1, "@radio").expect("add channel");
    }

    let found = channels::get_channels(&conn, 1).expect("get channels");
    assert_eq!(found, vec!["@radio".to_string()]);
}

#[test]
fn channels_are_returned_in_insertion_order() {
    let (_dir, pool) = common::test_pool();
    let conn = get_connection(&pool).expect("get connection");

    channels::add_channel(&conn, 1, "@radio").expect("add channel");
    channels::add_channel(&conn, 1, "@radio").expect("add channel");
    channels::add_channel(&conn, 1, "@jazz").expect("add channel");

    let found = channels::get_channels(&conn, 1).expect("get channels");
    assert_eq!(found, vec!["@radio".to_string(), "@jazz".to_string()]);
}

#[test]
fn channel_sets_are_scoped_per_user() {
    let (_dir, pool) = common::test_pool();
    let conn = get_connection(&pool).expect("get connection");

    channels::add_channel(&conn, 1, "@radio").expect("add channel");
    channels::add_channel(&conn, 2, "@jazz").expect("add channel");

    assert_eq!(
        channels::get_channels(&conn, 1).expect("get channels"),
        vec!["@radio".to_string()]
    );
    assert_eq!(
        channels::get_channels(&conn, 2).expect("get channels"),
        vec!["@jazz".to_string()]
    );
}
