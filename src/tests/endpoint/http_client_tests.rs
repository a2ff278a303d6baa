use super::*;

#[test]
fn retry_delay_doubles_per_attempt() {
    assert_eq!(retry_delay(0), Duration::from_millis(200));
    assert_eq!(retry_delay(1), Duration::from_millis(400));
}

#[test]
fn with_retries_recovers_from_transient_failures() {
    let mut calls = 0;
    let out = with_retries("GET /v1/workspaces", || {
        calls += 1;
        if calls < 2 {
            return Err(Failure::Transient(anyhow::anyhow!("server answered 503")));
        }
        Ok(calls)
    })
    .expect("succeeds on second attempt");
    assert_eq!(out, 2);
    assert_eq!(calls, 2);
}

#[test]
fn with_retries_gives_up_after_three_transient_failures() {
    let mut calls = 0;
    let err = with_retries::<()>("GET /v1/workspaces", || {
        calls += 1;
        Err(Failure::Transient(anyhow::anyhow!("boom {}", calls)))
    })
    .expect_err("all attempts fail");
    assert_eq!(calls, 3);
    assert_eq!(format!("{:#}", err), "boom 3");
}

#[test]
fn with_retries_stops_at_first_fatal_failure() {
    let mut calls = 0;
    let err = with_retries::<()>("GET /v1/workspaces", || {
        calls += 1;
        Err(Failure::Fatal(anyhow::anyhow!("server answered 404 Not Found")))
    })
    .expect_err("fatal");
    assert_eq!(calls, 1);
    assert!(err.to_string().contains("404"));
}

#[test]
fn statuses_are_classified_by_retryability() {
    assert!(check_status(StatusCode::OK).is_ok());
    assert!(check_status(StatusCode::NO_CONTENT).is_ok());
    for status in [
        StatusCode::TOO_MANY_REQUESTS,
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::SERVICE_UNAVAILABLE,
    ] {
        assert!(
            matches!(check_status(status), Err(Failure::Transient(_))),
            "{} should be transient",
            status
        );
    }
    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::UNAUTHORIZED,
        StatusCode::FORBIDDEN,
        StatusCode::NOT_FOUND,
    ] {
        assert!(
            matches!(check_status(status), Err(Failure::Fatal(_))),
            "{} should be fatal",
            status
        );
    }
    let Err(Failure::Fatal(err)) = check_status(StatusCode::UNAUTHORIZED) else {
        panic!("401 should be fatal");
    };
    assert!(err.to_string().starts_with("unauthorized"));
}

#[test]
fn refused_connection_is_transient() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = reqwest::blocking::get(format!("http://{}/", addr)).expect_err("nothing listening");
    assert!(matches!(Failure::from(err), Failure::Transient(_)));
}
