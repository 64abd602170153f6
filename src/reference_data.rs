use crate::ua_error::UaError;
use crate::ua_error::UaError::{DuplicateOsVersion, EmptyReferenceTable, LookupError};

/// An iOS release and the build identifier Apple shipped it with.
///
/// The version uses `_` as separator, the way it appears in `CPU iPhone OS 17_6_1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsRelease {
    pub version: &'static str,
    pub build_id: &'static str,
}

impl OsRelease {
    /// Leading numeric component of the version, e.g. "17" for "17_6_1".
    pub fn major_version(&self) -> &'static str {
        major_version(self.version)
    }

    /// Version with every separator turned into a period, e.g. "17.6.1".
    pub fn dotted_version(&self) -> String {
        self.version.replace('_', ".")
    }
}

pub fn major_version(version: &str) -> &str {
    version
        .split(|c: char| c == '_' || c == '.')
        .next()
        .unwrap_or(version)
}

const OS_RELEASES: [OsRelease; 16] = [
    OsRelease { version: "16_1_1", build_id: "20B101" },
    OsRelease { version: "16_2", build_id: "20C65" },
    OsRelease { version: "16_3_1", build_id: "20D67" },
    OsRelease { version: "17_0_3", build_id: "21A360" },
    OsRelease { version: "17_3_1", build_id: "21D61" },
    OsRelease { version: "17_5_1", build_id: "21F90" },
    OsRelease { version: "17_6_1", build_id: "21G93" },
    OsRelease { version: "17_7_1", build_id: "21H216" },
    OsRelease { version: "18_1", build_id: "22B83" },
    OsRelease { version: "18_1_1", build_id: "22B91" },
    OsRelease { version: "18_2", build_id: "22C152" },
    OsRelease { version: "18_2_1", build_id: "22C161" },
    OsRelease { version: "18_3", build_id: "22D5034e" },
    OsRelease { version: "18_3_1", build_id: "22D72" },
    OsRelease { version: "18_3_2", build_id: "22D82" },
    OsRelease { version: "18_5", build_id: "22F76" },
];

// FBAV
const APP_VERSIONS: [&str; 6] = [
    "521.0.0.42.97",
    "520.0.0.44.99",
    "519.0.0.44.92",
    "523.0.0.39.61",
    "522.0.0.52.96",
    "518.0.0.63.86",
];

// FBBV
const APP_BUILDS: [&str; 8] = [
    "753726094",
    "763693145",
    "760232234",
    "743277063",
    "746450682",
    "735017191",
    "740881359",
    "756351453",
];

// FBRV
const RELEASE_VARIANTS: [&str; 41] = [
    "680644226", "680322911", "680469061", "621632390", "681030704", "680568676",
    "681076370", "681139536", "681201580", "653715064", "681245869", "681417540",
    "681311148", "681558933", "681788640", "682160012", "681945070", "682241554",
    "651031300", "682594010", "682651530", "683081814", "682948902", "682998814",
    "684591905", "684552024", "685547697", "702334248", "709773866", "709959009",
    "709853509", "710721179", "708854960", "711680447", "716125254", "715382107",
    "712354525", "719983960", "719600518", "718473750", "717113040",
];

// FBDV per OS major version
const DEVICE_POOLS: [(&str, &[&str]); 3] = [
    ("16", &["iPhone14,7", "iPhone14,8", "iPhone15,2", "iPhone15,3"]),
    ("17", &["iPhone15,4", "iPhone15,5", "iPhone16,1", "iPhone16,2"]),
    ("18", &["iPhone17,3", "iPhone17,4", "iPhone17,1", "iPhone17,2"]),
];

/// Read-only tables the generator samples from.
///
/// Fields are public so alternative data sets can be assembled, the built-in one is [`REFERENCE_DATA`].
#[derive(Debug, Clone, Copy)]
pub struct ReferenceData {
    pub os_releases: &'static [OsRelease],
    pub app_versions: &'static [&'static str],
    pub app_builds: &'static [&'static str],
    pub release_variants: &'static [&'static str],
    pub device_pools: &'static [(&'static str, &'static [&'static str])],
}

pub static REFERENCE_DATA: ReferenceData = ReferenceData {
    os_releases: &OS_RELEASES,
    app_versions: &APP_VERSIONS,
    app_builds: &APP_BUILDS,
    release_variants: &RELEASE_VARIANTS,
    device_pools: &DEVICE_POOLS,
};

impl ReferenceData {
    pub fn os_releases(&self) -> &'static [OsRelease] {
        self.os_releases
    }

    pub fn app_versions(&self) -> &'static [&'static str] {
        self.app_versions
    }

    pub fn app_builds(&self) -> &'static [&'static str] {
        self.app_builds
    }

    pub fn release_variants(&self) -> &'static [&'static str] {
        self.release_variants
    }

    /// Device models compatible with an OS major version.
    ///
    /// A missing or empty pool is a data authoring bug and is reported as `LookupError`.
    pub fn devices_for_major_version(
        &self,
        major: &str,
    ) -> Result<&'static [&'static str], UaError> {
        self.device_pools
            .iter()
            .find(|(pool_major, _)| *pool_major == major)
            .map(|(_, devices)| *devices)
            .filter(|devices| !devices.is_empty())
            .ok_or_else(|| LookupError {
                major: major.to_string(),
            })
    }

    /// Checks the tables once so that inconsistencies fail at startup instead of mid-batch.
    pub fn validate(&self) -> Result<(), UaError> {
        let tables = [
            ("os_releases", self.os_releases.is_empty()),
            ("app_versions", self.app_versions.is_empty()),
            ("app_builds", self.app_builds.is_empty()),
            ("release_variants", self.release_variants.is_empty()),
        ];
        if let Some((table, _)) = tables.iter().find(|(_, empty)| *empty) {
            return Err(EmptyReferenceTable { table: *table });
        }
        for (i, os) in self.os_releases.iter().enumerate() {
            // a version maps to exactly one build identifier
            if self.os_releases[..i]
                .iter()
                .any(|o| o.dotted_version() == os.dotted_version())
            {
                return Err(DuplicateOsVersion {
                    version: os.version.to_string(),
                });
            }
            self.devices_for_major_version(os.major_version())?;
        }
        Ok(())
    }
}
