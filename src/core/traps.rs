use super::types::{DangerZone, IncomePoint, ZoneLoss};

/// Single pass over the series collecting maximal runs of strictly falling
/// net income. Each step is compared with its predecessor, never with the
/// start of the run.
pub fn detect_danger_zones(points: &[IncomePoint]) -> Vec<DangerZone> {
    let mut zones = Vec::new();
    let mut open: Option<DangerZone> = None;

    for pair in points.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);

        if current.net_income < previous.net_income {
            let zone = open.get_or_insert_with(|| DangerZone {
                start: previous.gross_income,
                end: previous.gross_income,
                start_net: previous.net_income,
                end_net: previous.net_income,
                losses: Vec::new(),
            });
            zone.losses.push(ZoneLoss {
                income: current.gross_income,
                net_loss: previous.net_income - current.net_income,
            });
        } else if let Some(mut zone) = open.take() {
            zone.end = previous.gross_income;
            zone.end_net = previous.net_income;
            zones.push(zone);
        }
    }

    if let (Some(mut zone), Some(last)) = (open, points.last()) {
        zone.end = last.gross_income;
        zone.end_net = last.net_income;
        zones.push(zone);
    }

    zones
}
