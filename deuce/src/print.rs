use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::pair::OddsPair;

pub fn tabulate_pairs(pairs: &[OddsPair]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(8)).with(Left)),
            Col::new(Styles::default().with(MinWidth(20)).with(Left)),
            Col::new(Styles::default().with(MinWidth(20)).with(Left)),
            Col::new(Styles::default().with(MinWidth(12)).with(Left)),
            Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(6))
                    .with(HAlign::Right),
            ),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![
                "Provider".into(),
                "Home".into(),
                "Away".into(),
                "Event".into(),
                "Home".into(),
                "Away".into(),
                "Margin".into(),
                "Spread".into(),
            ],
        ));
    for pair in pairs {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                pair.provider().label().into(),
                pair.home().contender().to_owned().into(),
                pair.away().contender().to_owned().into(),
                pair.event().to_owned().into(),
                format!("{:.2}", pair.home().odds()).into(),
                format!("{:.2}", pair.away().odds()).into(),
                pair.margin_as_percent_string().into(),
                format!("{:.2}", pair.spread()).into(),
            ],
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    use crate::odds::Bookmaker;

    use super::*;

    #[test]
    fn tabulate() {
        let pairs = vec![OddsPair::new(
            Bookmaker::LvBet.odds("Iga Swiatek", 1.8).unwrap(),
            Bookmaker::LvBet.odds("Magda Linette", 2.0).unwrap(),
            "WTA Warsaw",
        )
        .unwrap()];
        let table = tabulate_pairs(&pairs);
        assert_eq!(2, table.num_rows());
        assert_eq!(8, table.num_cols());

        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("LV BET"));
        assert!(rendered.contains("Magda Linette"));
        assert!(rendered.contains("5.56%"));
        assert!(rendered.contains("0.20"));
    }
}
