use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Cell, Col, Row, Table};
use strum_macros::{Display, EnumIter, EnumString};

use crate::estimate::ProbabilityRecord;
use crate::progress::Progress;
use crate::team::Roster;

/// Row order of the probability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SortBy {
    #[default]
    Team,
    Estimated,
    Worst,
}
impl SortBy {
    pub fn sort(&self, records: &mut [ProbabilityRecord]) {
        match self {
            SortBy::Team => records.sort_by_key(|record| record.team),
            SortBy::Estimated => records.sort_by(|a, b| {
                b.estimated
                    .total_cmp(&a.estimated)
                    .then(a.team.cmp(&b.team))
            }),
            SortBy::Worst => records.sort_by(|a, b| {
                b.worst
                    .total_cmp(&a.worst)
                    .then(b.estimated.total_cmp(&a.estimated))
                    .then(a.team.cmp(&b.team))
            }),
        }
    }
}

pub fn tabulate_probabilities(records: &[ProbabilityRecord], roster: &Roster) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(20))),
            Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(12))
                    .with(HAlign::Right),
            ),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Team".into(),
                "Name".into(),
                "Worst-case".into(),
                "Tie share".into(),
                "Estimated".into(),
            ],
        ));
    table.push_rows(records.iter().map(|record| {
        Row::new(
            Styles::default(),
            vec![
                format!("{}", record.team).into(),
                roster.name(record.team).to_string().into(),
                format!("{:.6}", record.worst).into(),
                format!("{:.6}", record.tie).into(),
                format!("{:.6}", record.estimated).into(),
            ],
        )
    }));
    table
}

pub fn tabulate_progress(progress: &[Progress]) -> Table {
    let games = progress.iter().map(Progress::games).max().unwrap_or(0);
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(Styles::default().with(MinWidth(10)))];
            for _ in 0..games {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(4)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["Team".into()];
            for game in 0..games {
                header_cells.push(format!("G{}", game + 1).into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });
    for team in progress {
        let mut row_cells = vec![Cell::new(Styles::default(), team.team.clone().into())];
        for game in 0..games {
            let points = team
                .points
                .get(game)
                .map(|points| points.to_string())
                .unwrap_or_default();
            row_cells.push(Cell::new(Styles::default(), points.into()));
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}
