//! Piecewise cumulative lookup over capacity/value segments
//!
//! A [`LookupTable`] models a merit order or duration curve: each segment
//! offers `capacity(t)` units at `value(t)`. A lookup asks for the
//! capacity-weighted mean value of the slice `[offset, offset + query)` of
//! the stacked capacities, walking the segments front to back
//! ([`LookupTable::lookup`]) or back to front ([`LookupTable::rlookup`]).

use horizon_core::{EngineConfig, TimePoint};
use horizon_ports::{SignalError, SignalResult, TimeBased};
use log::debug;

use crate::mean::RunningMean;
use crate::signal::Signal;

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub capacity: Signal,
    pub value: Signal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    segments: Vec<Segment>,
    epsilon: f64,
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl LookupTable {
    /// Empty table; negative queries within `config.epsilon` count as zero
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            segments: Vec::new(),
            epsilon: config.epsilon,
        }
    }

    /// Add a segment at the end of the table
    pub fn append(&mut self, capacity: impl Into<Signal>, value: impl Into<Signal>) {
        self.segments.push(Segment {
            capacity: capacity.into(),
            value: value.into(),
        });
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Earliest start over all capacity and value signals
    pub fn start(&self) -> TimePoint {
        self.segments
            .iter()
            .map(|s| s.capacity.start().min(s.value.start()))
            .min()
            .unwrap_or(TimePoint::FAR_PAST)
    }

    /// Capacity-weighted mean value of the whole table at `time_point`
    ///
    /// Segments with zero capacity are skipped.
    pub fn value(&self, time_point: TimePoint) -> SignalResult<f64> {
        let mut acc = RunningMean::default();
        for segment in &self.segments {
            let capacity = segment.capacity.value(time_point)?;
            if capacity != 0.0 {
                acc.include(capacity, segment.value.value(time_point)?);
            }
        }
        Ok(acc.mean())
    }

    /// Mean value of the slice `[offset, offset + query)`, first segment first
    ///
    /// A zero `query` returns the value of the segment containing `offset`,
    /// or 0 if `offset` lies beyond the total capacity.
    ///
    /// # Errors
    /// [`SignalError::NegativeQuery`] if `query` is below `-epsilon`, or any
    /// evaluation error of a segment signal.
    pub fn lookup(&self, time_point: TimePoint, query: f64, offset: f64) -> SignalResult<f64> {
        let query = self.checked_query(query)?;
        cumulative_mean(self.segments.iter(), time_point, query, offset)
    }

    /// Same as [`LookupTable::lookup`] with the segments walked last to first
    pub fn rlookup(&self, time_point: TimePoint, query: f64, offset: f64) -> SignalResult<f64> {
        let query = self.checked_query(query)?;
        cumulative_mean(self.segments.iter().rev(), time_point, query, offset)
    }

    pub fn to_text(&self) -> String {
        let mut text = String::from("#type;lookup_table;");
        for segment in &self.segments {
            text.push_str(&format!(
                "#capacity;{}#value;{}",
                segment.capacity.to_text(),
                segment.value.to_text()
            ));
        }
        text
    }

    fn checked_query(&self, query: f64) -> SignalResult<f64> {
        if query < -self.epsilon {
            return Err(SignalError::NegativeQuery(query));
        }
        Ok(query.max(0.0))
    }
}

fn cumulative_mean<'a>(
    mut segments: impl Iterator<Item = &'a Segment>,
    time_point: TimePoint,
    query: f64,
    mut offset: f64,
) -> SignalResult<f64> {
    let mut first = None;
    for segment in segments.by_ref() {
        let capacity = segment.capacity.value(time_point)?;
        if capacity <= offset {
            offset -= capacity;
        } else {
            first = Some((segment, capacity));
            break;
        }
    }
    let Some((first, first_capacity)) = first else {
        debug!("Lookup offset exceeds total capacity by {}", offset);
        return Ok(0.0);
    };
    if query == 0.0 {
        return first.value.value(time_point);
    }

    let rest = segments.map(|segment| {
        segment
            .capacity
            .value(time_point)
            .map(|capacity| (segment, capacity))
    });
    let mut acc = RunningMean::default();
    let mut countdown = query + offset;
    for item in std::iter::once(Ok((first, first_capacity))).chain(rest) {
        let (segment, capacity) = item?;
        if capacity < countdown {
            countdown -= capacity;
            acc.include(capacity - offset, segment.value.value(time_point)?);
        } else {
            let active = (capacity - offset).min(countdown.min(query));
            acc.include(active, segment.value.value(time_point)?);
            return Ok(acc.mean());
        }
        offset = 0.0;
    }
    debug!("Lookup query exceeds remaining capacity by {}", countdown);
    Ok(acc.mean())
}
