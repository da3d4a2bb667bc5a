/// Asserts that two vectors contain the same elements, ignoring order.
/// The element type must implement PartialOrd.
#[macro_export]
macro_rules! assert_equiv {
    ($left_vec:expr, $right_vec:expr) => {{
        let mut l = $left_vec.clone();
        l.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mut r = $right_vec.clone();
        r.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(l, r);
    }};
}

#[macro_export]
macro_rules! map (
        { $($key:expr => $value:expr),+ } => {
            {
                let mut m = ::std::collections::HashMap::new();
                $(
                m.insert($key, $value);
                )+
                m
            }
        };
    );
