/// Renders an error followed by every `source()` beneath it, joined by `: `.
///
/// `reqwest` keeps the interesting part (connection refused, DNS failure,
/// timeout) one or two levels down, so `to_string()` alone reads as
/// "error sending request" and nothing else.
pub trait ToChainString {
    fn to_chain_string(&self) -> String;
}

impl<E: std::error::Error + ?Sized> ToChainString for E {
    fn to_chain_string(&self) -> String {
        let mut rendered = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !rendered.ends_with(&cause_text) {
                rendered.push_str(": ");
                rendered.push_str(&cause_text);
            }
            source = cause.source();
        }
        rendered
    }
}
