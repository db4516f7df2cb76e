// Stamped by the release build through environment variables.
const COMMIT: &str = match option_env!("KUBECTL_HTPASSWD_COMMIT") {
    Some(commit) => commit,
    None => "none",
};
const DATE: &str = match option_env!("KUBECTL_HTPASSWD_DATE") {
    Some(date) => date,
    None => "unknown",
};
const TAG: &str = match option_env!("KUBECTL_HTPASSWD_TAG") {
    Some(tag) => tag,
    None => env!("CARGO_PKG_VERSION"),
};

pub fn print() {
    println!("commit : {}", COMMIT);
    println!("date   : {}", DATE);
    println!("version: {}", TAG);
}
