use crate::data::transform::{PieSpec, ScatterSpec, aggregate, filter_for_scatter};
use crate::state::{Controls, DashContext};

// ---------------------------------------------------------------------------
// Event-subscription binding layer
// ---------------------------------------------------------------------------
//
// Each chart output registers a handler together with an explicit list of the
// inputs it depends on. A change event re-runs exactly the handlers whose
// dependency list names the changed input, once each, synchronously. This
// keeps the wiring swappable and testable with synthetic event sequences.

/// UI inputs that can emit change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputId {
    SiteDropdown,
    PayloadSlider,
}

/// Chart outputs that can be recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChartId {
    SuccessPie,
    PayloadScatter,
}

/// Result of one handler invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    Pie(PieSpec),
    Scatter(ScatterSpec),
}

type Handler = Box<dyn Fn(&DashContext, &Controls) -> ChartOutput>;

struct Subscription {
    chart: ChartId,
    inputs: Vec<InputId>,
    handler: Handler,
}

/// Registered chart subscriptions.
pub struct Bindings {
    subs: Vec<Subscription>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings { subs: Vec::new() }
    }

    /// The standard dashboard wiring: the pie depends on the site dropdown
    /// only, the scatter on both the dropdown and the payload slider.
    pub fn dashboard() -> Self {
        let mut bindings = Bindings::new();
        bindings.subscribe(
            ChartId::SuccessPie,
            &[InputId::SiteDropdown],
            |ctx: &DashContext, controls: &Controls| {
                ChartOutput::Pie(aggregate(&ctx.dataset, &controls.selection))
            },
        );
        bindings.subscribe(
            ChartId::PayloadScatter,
            &[InputId::SiteDropdown, InputId::PayloadSlider],
            |ctx: &DashContext, controls: &Controls| {
                ChartOutput::Scatter(filter_for_scatter(
                    &ctx.dataset,
                    &controls.selection,
                    controls.range,
                ))
            },
        );
        bindings
    }

    /// Register a chart handler with its input dependencies.
    pub fn subscribe(
        &mut self,
        chart: ChartId,
        inputs: &[InputId],
        handler: impl Fn(&DashContext, &Controls) -> ChartOutput + 'static,
    ) {
        self.subs.push(Subscription {
            chart,
            inputs: inputs.to_vec(),
            handler: Box::new(handler),
        });
    }

    /// Charts whose dependency list contains `input`.
    pub fn dependents(&self, input: InputId) -> Vec<ChartId> {
        self.subs
            .iter()
            .filter(|s| s.inputs.contains(&input))
            .map(|s| s.chart)
            .collect()
    }

    /// Process one input-change event: invoke every dependent handler once
    /// and return the recomputed outputs.
    pub fn dispatch(
        &self,
        ctx: &DashContext,
        controls: &Controls,
        changed: InputId,
    ) -> Vec<(ChartId, ChartOutput)> {
        self.subs
            .iter()
            .filter(|s| s.inputs.contains(&changed))
            .map(|s| (s.chart, (s.handler)(ctx, controls)))
            .collect()
    }

    /// Invoke every registered handler, used for the initial render.
    pub fn dispatch_all(&self, ctx: &DashContext, controls: &Controls) -> Vec<(ChartId, ChartOutput)> {
        self.subs
            .iter()
            .map(|s| (s.chart, (s.handler)(ctx, controls)))
            .collect()
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Bindings::dashboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchDataset, LaunchRecord, Outcome};
    use crate::data::transform::{PayloadRange, SiteSelection};
    use std::cell::Cell;
    use std::rc::Rc;

    fn context() -> DashContext {
        DashContext::new(LaunchDataset::from_records(vec![
            LaunchRecord {
                site: "CCAFS".to_string(),
                payload_mass_kg: 500.0,
                outcome: Outcome::Failure,
                booster_version: "F9 v1.0".to_string(),
            },
            LaunchRecord {
                site: "KSC".to_string(),
                payload_mass_kg: 3000.0,
                outcome: Outcome::Success,
                booster_version: "F9 B5".to_string(),
            },
        ]))
    }

    #[test]
    fn dependency_lists_are_honoured() {
        let bindings = Bindings::dashboard();
        assert_eq!(
            bindings.dependents(InputId::SiteDropdown),
            vec![ChartId::SuccessPie, ChartId::PayloadScatter]
        );
        assert_eq!(
            bindings.dependents(InputId::PayloadSlider),
            vec![ChartId::PayloadScatter]
        );
    }

    #[test]
    fn slider_event_recomputes_only_the_scatter() {
        let ctx = context();
        let controls = Controls::new(&ctx);
        let outputs = Bindings::dashboard().dispatch(&ctx, &controls, InputId::PayloadSlider);
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].0, ChartId::PayloadScatter);
    }

    #[test]
    fn dropdown_event_recomputes_both_charts() {
        let ctx = context();
        let controls = Controls::new(&ctx);
        let outputs = Bindings::dashboard().dispatch(&ctx, &controls, InputId::SiteDropdown);
        let charts: Vec<ChartId> = outputs.iter().map(|(c, _)| *c).collect();
        assert_eq!(charts, vec![ChartId::SuccessPie, ChartId::PayloadScatter]);
    }

    #[test]
    fn handlers_run_once_per_event() {
        let ctx = context();
        let controls = Controls::new(&ctx);
        let calls = Rc::new(Cell::new(0));

        let mut bindings = Bindings::new();
        let counter = Rc::clone(&calls);
        bindings.subscribe(
            ChartId::SuccessPie,
            &[InputId::SiteDropdown, InputId::PayloadSlider],
            move |ctx: &DashContext, controls: &Controls| {
                counter.set(counter.get() + 1);
                ChartOutput::Pie(aggregate(&ctx.dataset, &controls.selection))
            },
        );

        bindings.dispatch(&ctx, &controls, InputId::SiteDropdown);
        assert_eq!(calls.get(), 1);
        bindings.dispatch(&ctx, &controls, InputId::PayloadSlider);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn synthetic_event_sequence_matches_direct_computation() {
        let ctx = context();
        let mut controls = Controls::new(&ctx);
        let bindings = Bindings::dashboard();

        controls.selection = SiteSelection::Site("KSC".to_string());
        controls.range = PayloadRange::new(0.0, 10_000.0);

        let outputs = bindings.dispatch(&ctx, &controls, InputId::SiteDropdown);
        let expected_pie = aggregate(&ctx.dataset, &controls.selection);
        let expected_scatter = filter_for_scatter(&ctx.dataset, &controls.selection, controls.range);
        assert_eq!(outputs[0].1, ChartOutput::Pie(expected_pie));
        assert_eq!(outputs[1].1, ChartOutput::Scatter(expected_scatter));
    }
}
