/// Accepts an ip like 127.0.0.1:9300 or a docker host name like node1:9300,
/// with or without an explicit scheme.
pub(crate) fn address_str(addr: &str) -> String {
    if addr.starts_with("http://") || addr.starts_with("https://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    }
}
