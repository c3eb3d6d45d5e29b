//! ConfigureAreaUseCase: picks a device, measures it and programs the area.
//!
//! The use case is split in two so the binary can print the equivalent
//! utility command between computing and writing:
//!
//! - [`ConfigureAreaUseCase::plan`] selects the device, obtains the tablet
//!   area and runs the geometry pipeline.  Its only device mutation is the
//!   reset to the driver default that precedes the tablet-area query.
//! - [`ConfigureAreaUseCase::apply`] writes the planned area exactly once,
//!   or does nothing in dry-run mode.
//!
//! If anything fails after the reset, the area the device had before the run
//! is written back so a failed invocation leaves the tablet as it found it.

use tablet_area_core::{
    compute_active_area, ActiveAreaPlan, ActiveAreaRequest, Alignment, AspectRatio,
    DeviceAreaCommand, GeometryError, ParseError, RequestError, TabletArea,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::device_control::{DeviceControl, DeviceControlError};
use super::select_device::{select_device, DiscoveryError, SelectedDevice};

/// Every way a configure run can fail.
#[derive(Debug, Error)]
pub enum ConfigureError {
    /// The size options are contradictory or out of range.
    #[error(transparent)]
    Configuration(#[from] RequestError),

    /// A command-line or config value could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No usable device was found.
    #[error(transparent)]
    DeviceDiscovery(DiscoveryError),

    /// The requested area does not fit on the tablet.
    #[error(transparent)]
    Geometry(GeometryError),

    /// The device reported an unusable tablet area.
    #[error(transparent)]
    Device(GeometryError),

    /// The device utility failed.
    #[error(transparent)]
    ExternalTool(#[from] DeviceControlError),
}

impl From<DiscoveryError> for ConfigureError {
    fn from(e: DiscoveryError) -> Self {
        match e {
            DiscoveryError::Control(e) => ConfigureError::ExternalTool(e),
            other => ConfigureError::DeviceDiscovery(other),
        }
    }
}

impl From<GeometryError> for ConfigureError {
    fn from(e: GeometryError) -> Self {
        match e {
            GeometryError::OutOfBounds { .. } => ConfigureError::Geometry(e),
            GeometryError::EmptyTabletArea(_) | GeometryError::InvalidReportedArea(_) => {
                ConfigureError::Device(e)
            }
        }
    }
}

/// Validated inputs for one run.
///
/// Everything here has already been parsed; building it performs no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSettings {
    /// Device id or name; `None` selects automatically.
    pub device: Option<String>,
    pub aspect: AspectRatio,
    /// Tablet size to use instead of asking the device.
    pub device_area: Option<TabletArea>,
    pub request: ActiveAreaRequest,
    pub alignment: Alignment,
    /// Compute and report, but never write the device.
    pub dry_run: bool,
}

/// Where the tablet area used for the computation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabletAreaSource {
    /// Given explicitly; the device was not measured.
    Override,
    /// Queried from the device after resetting it to the driver default;
    /// `previous` is the area it had before the reset.
    Device { previous: DeviceAreaCommand },
    /// Queried without a reset (dry run); `reported` is the area as it was.
    UnverifiedDevice { reported: DeviceAreaCommand },
}

/// The outcome of [`ConfigureAreaUseCase::plan`].
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPlan {
    pub device: String,
    pub tablet: TabletArea,
    pub source: TabletAreaSource,
    pub geometry: ActiveAreaPlan,
    pub dry_run: bool,
}

impl AreaPlan {
    /// The area that [`ConfigureAreaUseCase::apply`] writes.
    pub fn command(&self) -> DeviceAreaCommand {
        self.geometry.command
    }

    /// `true` when the tablet size was read without resetting the device
    /// first, so it may not be the real tablet size.
    pub fn potentially_invalid(&self) -> bool {
        matches!(self.source, TabletAreaSource::UnverifiedDevice { .. })
    }
}

/// The Configure Area use case.
pub struct ConfigureAreaUseCase<C: DeviceControl> {
    control: C,
}

impl<C: DeviceControl> ConfigureAreaUseCase<C> {
    /// Creates the use case around a device utility.
    pub fn new(control: C) -> Self {
        Self { control }
    }

    /// The device utility this use case drives.
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Selects the device, obtains the tablet area and computes the command.
    ///
    /// # Errors
    ///
    /// Any [`ConfigureError`] except `Configuration` and `Parse`, which are
    /// raised while building [`AreaSettings`].
    pub fn plan(&self, settings: &AreaSettings) -> Result<AreaPlan, ConfigureError> {
        let selected = select_device(&self.control, settings.device.as_deref())?;
        debug!(device = %selected.id, current = %selected.current_area, "device selected");

        match settings.device_area {
            Some(tablet) => self.plan_with(settings, selected.id, tablet, TabletAreaSource::Override),
            None if settings.dry_run => self.plan_unverified(settings, selected),
            None => self.plan_after_reset(settings, selected),
        }
    }

    /// Writes the planned area.  A dry-run plan leaves the device untouched.
    ///
    /// If the write fails on a device that [`plan`](Self::plan) reset, the
    /// area it had before the reset is written back.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigureError::ExternalTool`] if the write fails.
    pub fn apply(&self, plan: &AreaPlan) -> Result<(), ConfigureError> {
        if plan.dry_run {
            info!(device = %plan.device, "dry run; device area left unchanged");
            return Ok(());
        }
        if let Err(e) = self.control.set_area(&plan.device, &plan.command()) {
            if let TabletAreaSource::Device { previous } = plan.source {
                self.restore(&plan.device, &previous);
            }
            return Err(e.into());
        }
        info!(device = %plan.device, area = %plan.command(), "active area set");
        Ok(())
    }

    /// [`plan`](Self::plan) followed by [`apply`](Self::apply).
    ///
    /// # Errors
    ///
    /// See [`plan`](Self::plan) and [`apply`](Self::apply).
    pub fn run(&self, settings: &AreaSettings) -> Result<AreaPlan, ConfigureError> {
        let plan = self.plan(settings)?;
        self.apply(&plan)?;
        Ok(plan)
    }

    /// The utility command line equivalent to applying `plan`.
    pub fn describe(&self, plan: &AreaPlan) -> String {
        self.control.describe_set_area(&plan.device, &plan.command())
    }

    fn plan_with(
        &self,
        settings: &AreaSettings,
        device: String,
        tablet: TabletArea,
        source: TabletAreaSource,
    ) -> Result<AreaPlan, ConfigureError> {
        if tablet.is_empty() {
            return Err(GeometryError::EmptyTabletArea(tablet).into());
        }
        let geometry =
            compute_active_area(tablet, settings.aspect, settings.request, settings.alignment)?;
        info!(%device, %tablet, area = %geometry.command, "computed active area");
        Ok(AreaPlan {
            device,
            tablet,
            source,
            geometry,
            dry_run: settings.dry_run,
        })
    }

    fn plan_unverified(
        &self,
        settings: &AreaSettings,
        selected: SelectedDevice,
    ) -> Result<AreaPlan, ConfigureError> {
        warn!("dry run: the device area is not reset before it is measured");
        warn!("dry run: results are only correct if the device currently uses its full area");

        let reported = selected.current_area;
        if !reported.is_anchored_at_origin() {
            error!(%reported, "invalid device area; calculations will be wrong");
        }
        let tablet = TabletArea::from_reported(&reported)?;
        self.plan_with(
            settings,
            selected.id,
            tablet,
            TabletAreaSource::UnverifiedDevice { reported },
        )
    }

    fn plan_after_reset(
        &self,
        settings: &AreaSettings,
        selected: SelectedDevice,
    ) -> Result<AreaPlan, ConfigureError> {
        self.control.set_area(&selected.id, &DeviceAreaCommand::RESET)?;
        debug!(device = %selected.id, "device area reset to driver default");

        let result = self
            .control
            .query_area(&selected.id)
            .map_err(ConfigureError::from)
            .and_then(|reported| {
                let tablet = TabletArea::from_reported(&reported)?;
                let source = TabletAreaSource::Device {
                    previous: selected.current_area,
                };
                self.plan_with(settings, selected.id.clone(), tablet, source)
            });

        if result.is_err() {
            self.restore(&selected.id, &selected.current_area);
        }
        result
    }

    fn restore(&self, device: &str, previous: &DeviceAreaCommand) {
        match self.control.set_area(device, previous) {
            Ok(()) => debug!(%device, area = %previous, "device area restored"),
            Err(e) => warn!(%device, "could not restore previous area: {e}"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
