use assert_float_eq::*;

use crate::testing::CannedTransport;

use super::*;

const MAIN_PAGE: &str = r#"
<html><body>
  <div id="cat-4">
    <div class="cat2 hide"><div class="title"><span>WTA</span></div>
      <div class="cat3 hide" id="cat3-4-11111"></div>
    </div>
  </div>
  <div id="cat-5">
    <div class="cat2 hide"><div class="title"><span>ATP</span></div>
      <div class="cat3 hide" id="cat3-5-55606"></div>
      <div class="cat3 hide" id="cat3-5-55617"></div>
    </div>
    <div class="cat2 hide"><div class="title"><span>ITF Kobiety</span></div>
      <div class="cat3 hide" id="cat3-5-41413"></div>
    </div>
    <div class="cat2 hide"><div class="title"><span> WTA </span></div>
      <div class="cat3 hide" id="cat3-5-41418"></div>
      <div class="cat3 hide" id="cat3-5-x"></div>
    </div>
  </div>
</body></html>
"#;

fn category_page(competition: &str, entries: &[(&str, &str, &str, &str)]) -> String {
    let entries: String = entries
        .iter()
        .map(|(game, contender, odds, event)| {
            format!(
                r#"<div class="event-rate" data-gamename="{game}" data-outcomename="{contender}" data-outcomeodds="{odds}" data-eventname="{event}">{odds}</div>"#
            )
        })
        .collect();
    format!(
        r#"<html><body>
  <div class="left outcomes-menu uppercase tl"><a href="/">Oferta</a></div>
  <div class="left outcomes-menu uppercase tl"><a href="/t">Tenis</a> &gt;&gt; <a href="/w">WTA</a> &gt;&gt; <a href="/c">{competition}</a></div>
  <div class="events">{entries}</div>
</body></html>"#
    )
}

fn parser() -> ForbetParser {
    ForbetParser::try_from(Config::default().with_throttle(Duration::ZERO)).unwrap()
}

#[test]
fn config_validation() {
    let mut config = Config::default();
    config.category_url_template = "https://www.iforbet.pl/oferta/8/".into();
    assert!(ForbetParser::try_from(config).is_err());
    assert_eq!(
        "https://www.iforbet.pl/oferta/8/55606",
        Config::default().category_url(55606)
    );
}

#[test]
fn category_ids_of_tours() {
    assert_eq!(vec![55606, 55617, 41418], parser().parse_category_ids(MAIN_PAGE).unwrap());
}

#[test]
fn main_page_without_tennis_menu() {
    assert!(parser().parse_category_ids("<html><body><div id=\"cat-4\"></div></body></html>").is_err());
}

#[test]
fn page_entries() {
    let html = category_page(
        "WTA Chicago",
        &[
            ("Zwycięzca", "Swiatek Iga", "1,25", "Swiatek Iga - Linette Magda"),
            ("Handicap", "Swiatek Iga", "1.90", "Swiatek Iga - Linette Magda"),
            ("Zwycięzca", "Linette Magda", "3.75", "Swiatek Iga - Linette Magda"),
            ("Zwycięzca", "Nowak B./Wisniewski C.", "2.00", "Nowak B./Wisniewski C. - Kowalska A./Lis D."),
            ("Zwycięzca", "Sabalenka Aryna", "-", "Sabalenka Aryna - Gauff Coco"),
            ("Zwycięzca", "Kowalska A./Lis D.", "-", "Nowak B./Wisniewski C. - Kowalska A./Lis D."),
        ],
    );
    let CategoryPage::Listed(entries) = parser().parse_category_page(&html).unwrap() else {
        panic!("page rejected");
    };
    assert_eq!(5, entries.len());
    let first = entries[0].as_ref().unwrap();
    assert_eq!("Iga Swiatek", first.odds.contender());
    assert_float_absolute_eq!(1.25, first.odds.odds(), 1e-12);
    assert_eq!("Swiatek Iga - Linette Magda", first.event);
    assert_eq!(Skip::Doubles("Nowak B./Wisniewski C.".into()), entries[2].clone().unwrap_err());
    assert_eq!(Skip::UnavailableOdds("-".into()), entries[3].clone().unwrap_err());
    assert_eq!(Skip::Doubles("Kowalska A./Lis D.".into()), entries[4].clone().unwrap_err());
}

#[test]
fn contenders_named_first_name_first() {
    let html = category_page(
        "ATP Paris",
        &[
            ("Zwycięzca", "Hurkacz Hubert", "1.80", "Hurkacz Hubert - Zverev Alexander"),
            ("Zwycięzca", "Auger-Aliassime  Felix", "2.40", "Auger-Aliassime Felix - Zverev Alexander"),
        ],
    );
    let CategoryPage::Listed(entries) = parser().parse_category_page(&html).unwrap() else {
        panic!("page rejected");
    };
    let contenders: Vec<_> = entries
        .iter()
        .map(|entry| entry.as_ref().unwrap().odds.contender().to_owned())
        .collect();
    assert_eq!(vec!["Hubert Hurkacz", "Felix Auger-Aliassime"], contenders);
}

#[test]
fn excluded_breadcrumb() {
    let html = category_page("ITF Bytom", &[("Zwycięzca", "Swiatek Iga", "1.25", "Bytom")]);
    assert_eq!(
        CategoryPage::Rejected(Skip::ExcludedCompetition("ITF Bytom".into())),
        parser().parse_category_page(&html).unwrap()
    );
}

#[test]
fn missing_breadcrumb() {
    let html = r#"<div class="left outcomes-menu uppercase tl"><a href="/">Oferta</a></div>"#;
    assert_eq!(
        CategoryPage::Rejected(Skip::MissingField("breadcrumb")),
        parser().parse_category_page(html).unwrap()
    );
}

fn canned_site() -> CannedTransport {
    let config = Config::default();
    CannedTransport::default()
        .with_text(MAIN_URL, MAIN_PAGE)
        .with_text(
            config.category_url(55606),
            category_page(
                "ATP Paris",
                &[
                    ("Zwycięzca", "Hurkacz Hubert", "1.80", "Hurkacz Hubert - Zverev Alexander"),
                    ("Zwycięzca", "Zverev Alexander", "2.00", "Hurkacz Hubert - Zverev Alexander"),
                ],
            ),
        )
        .with_text(
            config.category_url(55617),
            category_page("ATP Challenger Szczecin", &[("Zwycięzca", "Majchrzak Kamil", "1.60", "Szczecin")]),
        )
        .with_text(
            config.category_url(41418),
            category_page(
                "WTA Chicago",
                &[
                    ("Zwycięzca", "Swiatek Iga", "1.25", "Swiatek Iga - Linette Magda"),
                    ("Zwycięzca", "Sabalenka Aryna", "1.50", "Sabalenka Aryna - Gauff Coco"),
                    ("Zwycięzca", "Linette Magda", "3.75", "Swiatek Iga - Linette Magda"),
                ],
            ),
        )
}

#[tokio::test]
async fn get_pairs_across_categories() {
    let transport = canned_site();
    let pairs = parser().get_pairs(&transport).await.unwrap();
    assert_eq!(2, pairs.len());
    assert_eq!(("Hubert Hurkacz", "Alexander Zverev"), pairs[0].contenders());
    assert_eq!(("Iga Swiatek", "Magda Linette"), pairs[1].contenders());
    assert_eq!("Swiatek Iga - Linette Magda", pairs[1].event());
    assert_eq!(Bookmaker::ForBet, pairs[1].provider());
    assert_eq!(4, transport.requests().len());
}

#[tokio::test(start_paused = true)]
async fn get_pairs_throttles_between_categories() {
    let config = Config::default();
    let throttle = config.throttle;
    let transport = canned_site();
    let start = tokio::time::Instant::now();
    let pairs = ForbetParser::try_from(config).unwrap().get_pairs(&transport).await.unwrap();
    assert_eq!(2, pairs.len());
    assert_eq!(throttle * 2, start.elapsed());
}
