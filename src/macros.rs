/// Builds a [`HeaderMap`](crate::HeaderMap) from literal names and values.
///
/// A name takes either one value or a bracketed list of values.
///
/// ```rust
/// use header_lines::headers;
///
/// let map = headers! {
///     "Host" => "example.com",
///     "Accept" => ["text/html", "*/*"],
/// };
/// assert_eq!(map.get_all("Accept"), ["text/html", "*/*"]);
/// ```
#[macro_export]
macro_rules! headers {
    (@append $map:ident, $name:expr, [ $($value:expr),* $(,)? ]) => {
        $(
            $map.append($name, $value);
        )*
    };

    (@append $map:ident, $name:expr, $value:expr) => {
        $map.append($name, $value);
    };

    // Handle empty map
    () => {
        $crate::HeaderMap::new()
    };

    ($($name:expr => $values:tt),+ $(,)?) => {{
        let mut map = $crate::HeaderMap::new();
        $(
            $crate::headers!(@append map, $name, $values);
        )+
        map
    }};
}
