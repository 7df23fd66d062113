//! End-to-end tests for the synthetic environment
//!
//! Drives the window the way an embedding host would: DOM mutations
//! through window.document, timers against the manual clock, storage,
//! history and the fetch stub together.

use std::cell::RefCell;
use std::rc::Rc;
use vitro_window::{Request, Window, fetch, stack};

#[test]
fn test_dom_through_window() {
    let mut window = Window::new("https://example.com/").unwrap();

    let list = window.document.create_element("ul");
    let item = window.document.create_element("li");
    let label = window.document.create_text_node("first");
    let body = window.document.body();

    let tree = window.document.tree_mut();
    tree.append_child(body, list).unwrap();
    tree.append_child(list, item).unwrap();
    tree.append_child(item, label).unwrap();
    tree.set_attribute(list, "id", "todo").unwrap();

    assert_eq!(window.document.get_element_by_id("todo"), Some(list));
    assert_eq!(window.document.tree().text_content(body), "first");
    assert_eq!(window.document.query_selector("#todo"), None); // selectors stay stubbed
}

#[test]
fn test_timers_drive_dom_updates() {
    let mut window = Window::new("https://example.com/").unwrap();
    let fired = Rc::new(RefCell::new(0u32));

    for delay in [10, 20, 30] {
        let fired = fired.clone();
        window.timers.set_timeout(move || *fired.borrow_mut() += 1, delay);
    }

    assert_eq!(window.timers.advance(15), 1);
    assert_eq!(*fired.borrow(), 1);
    assert_eq!(window.timers.advance(100), 2);
    assert_eq!(*fired.borrow(), 3);
}

#[test]
fn test_storage_areas_are_independent() {
    let mut window = Window::new("https://example.com/").unwrap();

    window.local_storage.set_item("k", "local");
    window.session_storage.set_item("k", "session");

    assert_eq!(window.local_storage.get_item("k"), Some("local"));
    assert_eq!(window.session_storage.get_item("k"), Some("session"));
}

#[test]
fn test_navigation_and_history_round_trip() {
    let mut window = Window::new("https://example.com/").unwrap();
    window.navigate("https://example.com/a").unwrap();
    window.navigate("https://example.com/b").unwrap();

    let back = window.history.back().unwrap().url.clone();
    assert_eq!(back, "https://example.com/a");
    // location is independent state; the host applies the entry
    window.location.assign(&back).unwrap();
    assert_eq!(window.location.pathname(), "/a");
}

#[test]
fn test_fetch_stub_and_console() {
    let mut window = Window::new("https://example.com/").unwrap();

    let response = fetch(&Request::new("https://example.com/api"));
    window.console.log(&["status", &response.status.to_string()]);

    assert!(response.ok());
    assert_eq!(window.console.entries().len(), 1);
    assert_eq!(window.console.entries()[0].1, "status 200");
}

#[test]
fn test_stack_reformat_round_trip() {
    let raw = "Error: nope\n    at run (https://example.com/app.js:7:3)\n    at node:internal/x:1:1";
    let formatted = stack::reformat("Error", "nope", raw);

    assert_eq!(
        formatted,
        "Error: nope\n    at run (https://example.com/app.js:7:3)"
    );
}
