#[macro_export]
macro_rules! assert_empty {
    ($e:expr) => {{
        let actual = &$e;
        assert!(actual.is_empty(), "expected empty; actual={:?}", actual);
    }};
}
