use chrono::{Duration, NaiveTime, Utc};

use fixtura_core::{ConstraintKind, ConstraintTag, Definition, Error, Result, TargetType, Value};

use crate::config::Config;
use crate::processors::{ConstraintProcessor, ProcessContext};
use crate::statement::DataStatement;
use crate::strategy::InjectMode;

/// Temporal position family (`Future`/`Past`/`…OrPresent`): shifts the
/// current time by a fixed per-kind offset (one day for dates, one hour for
/// the time-carrying kinds), sign flipped in anti mode, and assembles the
/// target temporal kind's concrete value directly. Each representation is
/// handled independently; they are not numerically interchangeable.
pub struct TemporalProcessor;

impl ConstraintProcessor for TemporalProcessor {
    fn processable(&self, kind: ConstraintKind) -> bool {
        matches!(
            kind,
            ConstraintKind::Future
                | ConstraintKind::FutureOrPresent
                | ConstraintKind::Past
                | ConstraintKind::PastOrPresent
        )
    }

    fn process(
        &self,
        ctx: &mut ProcessContext<'_>,
        _config: &mut Config,
        def: &Definition,
        tag: &ConstraintTag,
        stmt: &mut DataStatement,
    ) -> Result<()> {
        let mode_sign: i64 = match ctx.mode {
            InjectMode::Expected => 1,
            InjectMode::AntiExpected => -1,
            InjectMode::DefaultValue => return Ok(()),
        };
        let forward = matches!(
            tag,
            ConstraintTag::Future | ConstraintTag::FutureOrPresent
        );
        let direction = if forward { mode_sign } else { -mode_sign };

        let now = Utc::now();
        let value = match def.target {
            TargetType::Date => Value::Date((now + Duration::days(direction)).date_naive()),
            TargetType::Time => Value::Time(shift_time(now.time(), direction)),
            TargetType::DateTime => {
                Value::DateTime((now + Duration::hours(direction)).naive_utc())
            }
            TargetType::Timestamp => Value::Timestamp(now + Duration::hours(direction)),
            _ => {
                return Err(Error::Unsupported(format!(
                    "temporal constraint on non-temporal kind {:?}",
                    def.target
                )));
            }
        };
        stmt.finish(value);
        Ok(())
    }
}

/// Hour shift clamped inside the current day. Time-of-day values compare as
/// plain times, so wrapping past midnight would land the result on the wrong
/// side of now.
fn shift_time(now: NaiveTime, hours: i64) -> NaiveTime {
    let (shifted, wrapped) = now.overflowing_add_signed(Duration::hours(hours));
    if wrapped == 0 {
        shifted
    } else if hours > 0 {
        NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(now)
    } else {
        NaiveTime::MIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_moves_within_the_day() {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).expect("time");
        assert_eq!(shift_time(noon, 1), NaiveTime::from_hms_opt(13, 0, 0).expect("time"));
        assert_eq!(shift_time(noon, -1), NaiveTime::from_hms_opt(11, 0, 0).expect("time"));
    }

    #[test]
    fn shift_clamps_at_the_day_boundary() {
        let late = NaiveTime::from_hms_opt(23, 30, 0).expect("time");
        assert_eq!(shift_time(late, 1), NaiveTime::from_hms_opt(23, 59, 59).expect("time"));

        let early = NaiveTime::from_hms_opt(0, 30, 0).expect("time");
        assert_eq!(shift_time(early, -1), NaiveTime::MIN);
    }
}
