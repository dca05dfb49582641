use crate::i18n::{t, tr};
use chrono::Datelike;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    #[prop_or_else(|| AttrValue::from("CPBRA"))]
    pub league_name: AttrValue,
    /// Overrides the current calendar year.
    #[prop_or_default]
    pub year: Option<i32>,
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = props.year.unwrap_or_else(current_year).to_string();
    let vars = BTreeMap::from([("year", year.as_str()), ("league", props.league_name.as_str())]);
    html! {
        <footer class="site-footer">
            <div class="copyright">{ tr("footer.copyright", Some(&vars)) }</div>
            <div class="social-links">
                <a href="#" class="social-link" title={t("footer.twitter")} aria-label={t("footer.twitter")}></a>
                <a href="#" class="social-link" title={t("footer.instagram")} aria-label={t("footer.instagram")}></a>
                <a href="#" class="social-link" title={t("footer.discord")} aria-label={t("footer.discord")}></a>
            </div>
        </footer>
    }
}
