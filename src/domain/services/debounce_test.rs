use super::Debouncer;

#[tokio::test]
async fn it_delivers_the_last_pushed_value() {
    let mut debouncer = Debouncer::new(5);

    debouncer.push("p");
    debouncer.push("ph");
    debouncer.push("pho");

    let res = debouncer.settle().await;
    assert_eq!(res, Some("pho".to_string()));
    assert!(!debouncer.is_pending());
}

#[tokio::test]
async fn it_returns_none_when_nothing_is_scheduled() {
    let mut debouncer = Debouncer::new(5);

    let res = debouncer.settle().await;
    assert_eq!(res, None);
}

#[tokio::test]
async fn it_cancels_pending_values() {
    let mut debouncer = Debouncer::new(5);

    debouncer.push("pho");
    debouncer.cancel();

    assert!(!debouncer.is_pending());
    let res = debouncer.settle().await;
    assert_eq!(res, None);
}

#[tokio::test]
async fn it_delivers_again_after_settling() {
    let mut debouncer = Debouncer::new(5);

    debouncer.push("pho");
    assert_eq!(debouncer.settle().await, Some("pho".to_string()));

    debouncer.push("banh mi");
    assert_eq!(debouncer.settle().await, Some("banh mi".to_string()));
}
