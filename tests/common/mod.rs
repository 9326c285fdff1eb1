use fragfill::callback_page::CallbackPage;
use fragfill::failure_policy::FailurePolicy;
use fragfill::parameter_set::PARAMETER_NAMES;

pub const FULL_REDIRECT_URL: &str = "https://app.example/cb#access_token=AAA&expires_in=3600&token_type=Bearer&scope=read&state=xyz";

pub fn loaded_page(redirect_url: &str) -> CallbackPage {
    let mut page = CallbackPage::new(redirect_url);
    page.install_populator(FailurePolicy::Collect);
    page.load().unwrap();
    page
}

pub fn parameter_values(page: &CallbackPage) -> Vec<String> {
    PARAMETER_NAMES
        .iter()
        .map(|name| page.fields().value(name).unwrap().to_owned())
        .collect()
}
