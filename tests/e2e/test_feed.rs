use crate::e2e::helpers;

use helpers::assertions::{assert_entry, assert_feed_header, parse_feed};
use helpers::{TestContext, TEST_API_KEY};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_requests_without_locations(ctx: &TestContext) {
    let response = ctx.client.get("/atom.xml").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "need ls");

    // Validation happens before any upstream lookup
    assert_eq!(ctx.upstream.call_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_unrelated_query_params(ctx: &TestContext) {
    let response = ctx.client.get("/atom.xml?location=Paris&x=1").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(ctx.upstream.call_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_build_feed_for_known_and_unknown_locations(ctx: &TestContext) {
    ctx.upstream.respond_ok("Berlin", "2020-05-01");
    ctx.upstream.respond_status("Paris", "ZERO_RESULTS");

    let response = ctx.client.get("/atom.xml?l=Paris&l=Berlin").await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "application/atom+xml");

    let feed = parse_feed(&response.body);
    assert_feed_header(&feed, "urn:street-view-updates:feed:QmVybGluIFBhcmlz");
    assert_eq!(feed.entries().len(), 1);
    assert_entry(&feed.entries()[0], "Berlin", "20200501", "2020-05-01");
    assert_eq!(
        feed.entries()[0].id(),
        "urn:street-view-updates:item:QmVybGlu:20200501"
    );
    assert!(!response.body.contains("Update for Paris"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_query_upstream_in_sorted_order_with_credential(ctx: &TestContext) {
    ctx.upstream.respond_ok("Berlin", "2020-05-01");

    ctx.client
        .get_feed(&["Zurich", "Berlin", "Amsterdam"])
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let calls = ctx.upstream.calls();
    let locations: Vec<_> = calls.iter().map(|c| c.location.as_str()).collect();
    assert_eq!(locations, vec!["Amsterdam", "Berlin", "Zurich"]);
    assert!(calls.iter().all(|c| c.key == TEST_API_KEY));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_be_independent_of_parameter_order(ctx: &TestContext) {
    ctx.upstream.respond_ok("Oslo", "2019-11");
    ctx.upstream.respond_ok("Lima", "2022");
    ctx.upstream.respond_ok("Cairo", "2021-03-14");

    let first = ctx.client.get_feed(&["Oslo", "Lima", "Cairo"]).await.unwrap();
    let second = ctx.client.get_feed(&["Cairo", "Oslo", "Lima"]).await.unwrap();

    first.assert_status(StatusCode::OK);
    second.assert_status(StatusCode::OK);
    assert_eq!(first.body, second.body);

    let feed = parse_feed(&first.body);
    assert_eq!(feed.entries().len(), 3);
    assert_entry(&feed.entries()[0], "Cairo", "20210314", "2021-03-14");
    assert_entry(&feed.entries()[1], "Lima", "20220101", "2022-01-01");
    assert_entry(&feed.entries()[2], "Oslo", "20191101", "2019-11-01");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_identical_documents_for_repeated_requests(ctx: &TestContext) {
    ctx.upstream.respond_ok("Times Square, New York", "2018-08");

    let requests = (0..5).map(|_| ctx.client.get_feed(&["Times Square, New York"]));
    let responses = futures::future::join_all(requests).await;

    let bodies: Vec<String> = responses
        .into_iter()
        .map(|r| {
            let r = r.unwrap();
            r.assert_status(StatusCode::OK);
            r.body
        })
        .collect();

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(bodies[0].contains("https://www.google.com/maps/place/Times+Square%2C+New+York"));
    assert_eq!(ctx.upstream.call_count(), 5);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_duplicate_locations(ctx: &TestContext) {
    ctx.upstream.respond_ok("Rome", "2017-04-02");

    let response = ctx.client.get_feed(&["Rome", "Rome"]).await.unwrap();

    response.assert_status(StatusCode::OK);
    let feed = parse_feed(&response.body);
    assert_eq!(feed.entries().len(), 2);
    assert_eq!(ctx.upstream.call_count(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_empty_feed_when_nothing_has_data(ctx: &TestContext) {
    let response = ctx.client.get_feed(&["Atlantis"]).await.unwrap();

    response.assert_status(StatusCode::OK);
    let feed = parse_feed(&response.body);
    assert_feed_header(&feed, "urn:street-view-updates:feed:QXRsYW50aXM");
    assert!(feed.entries().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_whole_feed_on_bad_date(ctx: &TestContext) {
    ctx.upstream.respond_ok("Athens", "2020-01-01");
    ctx.upstream.respond_ok("Bern", "sometime");
    ctx.upstream.respond_ok("Cork", "2020-01-01");

    let response = ctx.client.get_feed(&["Cork", "Bern", "Athens"]).await.unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "error");
    assert!(!response.body.contains("Athens"));

    // Fails fast, Cork is never looked up
    let locations: Vec<_> = ctx
        .upstream
        .calls()
        .into_iter()
        .map(|c| c.location)
        .collect();
    assert_eq!(locations, vec!["Athens".to_string(), "Bern".to_string()]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_on_unrecognised_upstream_status(ctx: &TestContext) {
    ctx.upstream.respond_status("Paris", "REQUEST_DENIED");

    let response = ctx.client.get_feed(&["Paris"]).await.unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "error");
    assert!(!response.body.contains("REQUEST_DENIED"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_on_upstream_http_error(ctx: &TestContext) {
    ctx.upstream.respond_ok("Berlin", "2020-05-01");
    ctx.upstream.respond_http_error("Paris", 503);

    let response = ctx.client.get_feed(&["Berlin", "Paris"]).await.unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "error");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id(ctx: &TestContext) {
    ctx.upstream.respond_ok("Berlin", "2020-05-01");

    let ok = ctx.client.get_feed(&["Berlin"]).await.unwrap();
    let bad = ctx.client.get("/atom.xml").await.unwrap();

    ok.assert_header_exists("x-request-id");
    bad.assert_header_exists("x-request-id");
    assert_ne!(ok.header("x-request-id"), bad.header("x-request-id"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_check_locations_that_are_not_valid_utf8(ctx: &TestContext) {
    let response = ctx.client.get("/atom.xml?l=%FF").await.unwrap();

    response.assert_status(StatusCode::OK);
    let locations: Vec<_> = ctx
        .upstream
        .calls()
        .into_iter()
        .map(|c| c.location)
        .collect();
    assert_eq!(locations, vec!["\u{fffd}".to_string()]);
}
