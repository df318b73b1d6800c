use crate::color::BoosterColors;
use crate::data::model::LaunchDataset;
use crate::data::transform::{
    OUTCOME_AXIS_LABELS, PayloadRange, PieSpec, ScatterSpec, SiteSelection,
};
use crate::reactive::{Bindings, ChartId, ChartOutput, InputId};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything derived from the dataset at startup. Immutable for the process
/// lifetime; the pure transforms only ever see it by reference.
pub struct DashContext {
    pub dataset: LaunchDataset,
    /// Dropdown options: `All Sites` followed by the sites in first-seen order.
    pub site_options: Vec<SiteSelection>,
    /// Slider default: the payload extent observed in the dataset.
    pub initial_range: PayloadRange,
}

impl DashContext {
    pub fn new(dataset: LaunchDataset) -> Self {
        let mut site_options = vec![SiteSelection::AllSites];
        site_options.extend(dataset.sites.iter().cloned().map(SiteSelection::Site));
        let initial_range = PayloadRange::new(dataset.payload_min, dataset.payload_max);
        DashContext {
            dataset,
            site_options,
            initial_range,
        }
    }
}

/// Ephemeral UI state, rewritten on every user interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub selection: SiteSelection,
    pub range: PayloadRange,
}

impl Controls {
    pub fn new(ctx: &DashContext) -> Self {
        Controls {
            selection: SiteSelection::AllSites,
            range: ctx.initial_range,
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub ctx: DashContext,
    pub controls: Controls,
    bindings: Bindings,
    /// Booster version → colour, fixed at startup.
    pub booster_colors: BoosterColors,
    /// Cached pie spec, replaced whenever a dependent input changes.
    pub pie: PieSpec,
    /// Cached scatter spec, replaced whenever a dependent input changes.
    pub scatter: ScatterSpec,
}

impl AppState {
    /// Wire up the default bindings and compute the initial charts.
    pub fn new(ctx: DashContext) -> Self {
        let controls = Controls::new(&ctx);
        let bindings = Bindings::dashboard();
        let booster_colors = BoosterColors::new(&ctx.dataset.booster_versions);

        let mut pie = PieSpec {
            title: String::new(),
            slices: Vec::new(),
        };
        let mut scatter = ScatterSpec {
            title: String::new(),
            indices: Vec::new(),
            axis_labels: OUTCOME_AXIS_LABELS,
        };
        for (chart, output) in bindings.dispatch_all(&ctx, &controls) {
            match (chart, output) {
                (ChartId::SuccessPie, ChartOutput::Pie(spec)) => pie = spec,
                (ChartId::PayloadScatter, ChartOutput::Scatter(spec)) => scatter = spec,
                (chart, _) => log::warn!("handler for {chart:?} returned mismatched output"),
            }
        }

        AppState {
            ctx,
            controls,
            bindings,
            booster_colors,
            pie,
            scatter,
        }
    }

    /// Process one input-change event: recompute exactly the dependent charts.
    pub fn input_changed(&mut self, input: InputId) {
        let outputs = self.bindings.dispatch(&self.ctx, &self.controls, input);
        for (chart, output) in outputs {
            match (chart, output) {
                (ChartId::SuccessPie, ChartOutput::Pie(spec)) => self.pie = spec,
                (ChartId::PayloadScatter, ChartOutput::Scatter(spec)) => self.scatter = spec,
                (chart, _) => log::warn!("handler for {chart:?} returned mismatched output"),
            }
        }
    }

    /// Dropdown change.
    pub fn set_selection(&mut self, selection: SiteSelection) {
        if self.controls.selection != selection {
            self.controls.selection = selection;
            self.input_changed(InputId::SiteDropdown);
        }
    }

    /// Slider change.
    pub fn set_range(&mut self, range: PayloadRange) {
        if self.controls.range != range {
            self.controls.range = range;
            self.input_changed(InputId::PayloadSlider);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn rec(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version: "F9 FT".to_string(),
        }
    }

    fn context() -> DashContext {
        DashContext::new(LaunchDataset::from_records(vec![
            rec("CCAFS", 500.0, Outcome::Failure),
            rec("CCAFS", 2000.0, Outcome::Success),
            rec("KSC", 3000.0, Outcome::Success),
        ]))
    }

    #[test]
    fn context_derives_options_and_default_range() {
        let ctx = context();
        assert_eq!(
            ctx.site_options,
            vec![
                SiteSelection::AllSites,
                SiteSelection::Site("CCAFS".to_string()),
                SiteSelection::Site("KSC".to_string()),
            ]
        );
        assert_eq!(ctx.initial_range, PayloadRange::new(500.0, 3000.0));
    }

    #[test]
    fn initial_charts_cover_the_whole_dataset() {
        let state = AppState::new(context());
        assert_eq!(state.controls.selection, SiteSelection::AllSites);
        assert_eq!(state.pie.title, "Total Successful Launches by Site");
        assert_eq!(state.pie.total(), 2);
        assert_eq!(state.scatter.indices, vec![0, 1, 2]);
    }

    #[test]
    fn dropdown_change_updates_both_charts() {
        let mut state = AppState::new(context());
        state.set_selection(SiteSelection::Site("KSC".to_string()));
        assert_eq!(state.pie.title, "Success vs. Failure for KSC");
        assert_eq!(state.pie.slices, vec![("Success".to_string(), 1)]);
        assert_eq!(state.scatter.title, "Payload vs. Outcome for KSC");
        assert_eq!(state.scatter.indices, vec![2]);
    }

    #[test]
    fn slider_change_leaves_the_pie_alone() {
        let mut state = AppState::new(context());
        let pie_before = state.pie.clone();
        state.set_range(PayloadRange::new(1000.0, 2500.0));
        assert_eq!(state.pie, pie_before);
        assert_eq!(state.scatter.indices, vec![1]);
    }

    #[test]
    fn unchanged_input_does_not_redispatch() {
        let mut state = AppState::new(context());
        let scatter_before = state.scatter.clone();
        state.set_range(state.controls.range);
        state.set_selection(SiteSelection::AllSites);
        assert_eq!(state.scatter, scatter_before);
    }
}
