use bdaybot_core::db::schema::create_schema;
use bdaybot_core::{open_store_in_memory, ServerRepository, SqliteServerRepository};
use rusqlite::Connection;

fn initialized_connection() -> Connection {
    let conn = open_store_in_memory().unwrap();
    create_schema(&conn).unwrap();
    conn
}

#[test]
fn set_then_query_round_trips() {
    let conn = initialized_connection();
    let repo = SqliteServerRepository::new(&conn);

    repo.set_server(500, 900).unwrap();

    let record = repo.get_server(500).unwrap().unwrap();
    assert_eq!(record.id, 500);
    assert_eq!(record.channel, 900);
}

#[test]
fn later_write_overwrites_channel() {
    let conn = initialized_connection();
    let repo = SqliteServerRepository::new(&conn);

    repo.set_server(500, 900).unwrap();
    repo.set_server(500, 901).unwrap();

    let record = repo.get_server(500).unwrap().unwrap();
    assert_eq!(record.channel, 901);

    let row_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM Servers WHERE ID = 500;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(row_count, 1);
}

#[test]
fn query_unknown_server_returns_none() {
    let conn = initialized_connection();
    let repo = SqliteServerRepository::new(&conn);

    assert!(repo.get_server(500).unwrap().is_none());
}

#[test]
fn mappings_for_distinct_servers_are_independent() {
    let conn = initialized_connection();
    let repo = SqliteServerRepository::new(&conn);

    repo.set_server(500, 900).unwrap();
    repo.set_server(501, 901).unwrap();
    repo.set_server(500, 902).unwrap();

    assert_eq!(repo.get_server(500).unwrap().unwrap().channel, 902);
    assert_eq!(repo.get_server(501).unwrap().unwrap().channel, 901);
}
