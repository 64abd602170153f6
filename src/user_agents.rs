use crate::reference_data::{ReferenceData, REFERENCE_DATA};
use crate::ua_error::UaError;
use crate::ua_error::UaError::EmptyReferenceTable;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// One consistent draw from the reference data, rendered through `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentFields {
    /// Dotted OS version, used for both the `CPU iPhone OS` and the `FBSV` fields.
    pub os_version: String,
    pub build_id: String,
    pub app_version: String,
    pub app_build: String,
    pub device_model: String,
    pub release_variant: String,
}

impl fmt::Display for UserAgentFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mozilla/5.0 (iPhone; CPU iPhone OS {os} like Mac OS X) \
             AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/{build} \
             [FBAN/FBIOS;FBAV/{fbav};FBBV/{fbbv};FBDV/{fbdv};\
             FBMD/iPhone;FBSN/iOS;FBSV/{os};FBSS/3;FBID/phone;\
             FBLC/en_US;FBOP/5;FBRV/{fbrv};IABMV/1]",
            os = self.os_version,
            build = self.build_id,
            fbav = self.app_version,
            fbbv = self.app_build,
            fbdv = self.device_model,
            fbrv = self.release_variant,
        )
    }
}

fn pick<R: Rng + ?Sized>(
    values: &'static [&'static str],
    table: &'static str,
    rng: &mut R,
) -> Result<&'static str, UaError> {
    values
        .choose(rng)
        .copied()
        .ok_or(EmptyReferenceTable { table })
}

/// Draws every field, the device model being the only one tied to another draw (the OS major version).
pub fn draw_fields<R: Rng + ?Sized>(
    data: &ReferenceData,
    rng: &mut R,
) -> Result<UserAgentFields, UaError> {
    let os = data
        .os_releases()
        .choose(rng)
        .ok_or(EmptyReferenceTable {
            table: "os_releases",
        })?;
    let devices = data.devices_for_major_version(os.major_version())?;
    let device_model = pick(devices, "device_pools", rng)?;
    let app_version = pick(data.app_versions(), "app_versions", rng)?;
    let app_build = pick(data.app_builds(), "app_builds", rng)?;
    let release_variant = pick(data.release_variants(), "release_variants", rng)?;

    Ok(UserAgentFields {
        os_version: os.dotted_version(),
        build_id: os.build_id.to_string(),
        app_version: app_version.to_string(),
        app_build: app_build.to_string(),
        device_model: device_model.to_string(),
        release_variant: release_variant.to_string(),
    })
}

pub fn generate_one_with<R: Rng + ?Sized>(
    data: &ReferenceData,
    rng: &mut R,
) -> Result<String, UaError> {
    draw_fields(data, rng).map(|fields| fields.to_string())
}

pub fn generate_batch_with<R: Rng + ?Sized>(
    data: &ReferenceData,
    rng: &mut R,
    count: usize,
) -> Result<Vec<String>, UaError> {
    (0..count).map(|_| generate_one_with(data, rng)).collect()
}

pub fn generate_one() -> Result<String, UaError> {
    generate_one_with(&REFERENCE_DATA, &mut rand::thread_rng())
}

pub fn generate_batch(count: usize) -> Result<Vec<String>, UaError> {
    generate_batch_with(&REFERENCE_DATA, &mut rand::thread_rng(), count)
}
