use crate::reference_data::{major_version, ReferenceData};
use crate::ua_error::UaError;
use crate::ua_error::UaError::MalformedUserAgent;
use crate::user_agents::UserAgentFields;

/// Walks a User-Agent string through the expected template.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn literal(&mut self, expected: &str) -> Result<(), UaError> {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(MalformedUserAgent {
                message: format!("expected '{}' at '{}'", expected, self.rest),
            }),
        }
    }

    fn field_until(&mut self, terminator: &str, name: &str) -> Result<&'a str, UaError> {
        let rest = self.rest;
        let end = rest.find(terminator).ok_or_else(|| MalformedUserAgent {
            message: format!("unterminated field '{}'", name),
        })?;
        let value = &rest[..end];
        if value.is_empty() {
            return Err(MalformedUserAgent {
                message: format!("empty field '{}'", name),
            });
        }
        self.rest = &rest[end + terminator.len()..];
        Ok(value)
    }
}

/// Extracts the variable fields of a generated User-Agent.
///
/// Fails if any literal part differs from the template or if the two OS versions disagree.
pub fn parse_user_agent(ua: &str) -> Result<UserAgentFields, UaError> {
    let mut cursor = Cursor { rest: ua };
    cursor.literal("Mozilla/5.0 (iPhone; CPU iPhone OS ")?;
    let os_version = cursor.field_until(" like Mac OS X) ", "os_version")?;
    cursor.literal("AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/")?;
    let build_id = cursor.field_until(" [FBAN/FBIOS;", "build_id")?;
    cursor.literal("FBAV/")?;
    let app_version = cursor.field_until(";", "FBAV")?;
    cursor.literal("FBBV/")?;
    let app_build = cursor.field_until(";", "FBBV")?;
    cursor.literal("FBDV/")?;
    let device_model = cursor.field_until(";", "FBDV")?;
    cursor.literal("FBMD/iPhone;FBSN/iOS;FBSV/")?;
    let software_version = cursor.field_until(";", "FBSV")?;
    cursor.literal("FBSS/3;FBID/phone;FBLC/en_US;FBOP/5;FBRV/")?;
    let release_variant = cursor.field_until(";", "FBRV")?;
    cursor.literal("IABMV/1]")?;

    if !cursor.rest.is_empty() {
        return Err(MalformedUserAgent {
            message: format!("trailing content '{}'", cursor.rest),
        });
    }
    if os_version != software_version {
        let message = format!(
            "OS version '{}' differs from FBSV '{}'",
            os_version, software_version
        );
        return Err(MalformedUserAgent { message });
    }
    if os_version.contains('_') {
        return Err(MalformedUserAgent {
            message: format!("OS version '{}' is not dotted", os_version),
        });
    }

    Ok(UserAgentFields {
        os_version: os_version.to_string(),
        build_id: build_id.to_string(),
        app_version: app_version.to_string(),
        app_build: app_build.to_string(),
        device_model: device_model.to_string(),
        release_variant: release_variant.to_string(),
    })
}

/// Parses a User-Agent and checks its fields against the reference data.
///
/// The build identifier must belong to the OS version and the device model to its major version pool.
pub fn check_user_agent(data: &ReferenceData, ua: &str) -> Result<UserAgentFields, UaError> {
    let fields = parse_user_agent(ua)?;
    let os = data
        .os_releases()
        .iter()
        .find(|os| os.dotted_version() == fields.os_version)
        .ok_or_else(|| MalformedUserAgent {
            message: format!("unknown OS version '{}'", fields.os_version),
        })?;
    if os.build_id != fields.build_id {
        let message = format!(
            "build '{}' does not belong to OS version '{}'",
            fields.build_id, fields.os_version
        );
        return Err(MalformedUserAgent { message });
    }
    let devices = data.devices_for_major_version(major_version(&fields.os_version))?;
    if !devices.contains(&fields.device_model.as_str()) {
        let message = format!(
            "device '{}' is not compatible with OS version '{}'",
            fields.device_model, fields.os_version
        );
        return Err(MalformedUserAgent { message });
    }
    Ok(fields)
}

#[cfg(test)]
mod agent_parser_tests {
    use super::*;
    use crate::reference_data::REFERENCE_DATA;

    const VALID: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 18.3.2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/22D82 [FBAN/FBIOS;FBAV/523.0.0.39.61;FBBV/760232234;FBDV/iPhone17,1;FBMD/iPhone;FBSN/iOS;FBSV/18.3.2;FBSS/3;FBID/phone;FBLC/en_US;FBOP/5;FBRV/717113040;IABMV/1]";

    fn expect_malformed(ua: &str, expected: &str) {
        match parse_user_agent(ua) {
            Err(UaError::MalformedUserAgent { message }) => assert_eq!(message, expected),
            _ => assert_eq!(true, false),
        }
    }

    #[test]
    fn happy_case() {
        let fields = parse_user_agent(VALID).unwrap();
        assert_eq!(fields.os_version, "18.3.2");
        assert_eq!(fields.build_id, "22D82");
        assert_eq!(fields.app_version, "523.0.0.39.61");
        assert_eq!(fields.app_build, "760232234");
        assert_eq!(fields.device_model, "iPhone17,1");
        assert_eq!(fields.release_variant, "717113040");
        assert_eq!(fields.to_string(), VALID);
    }

    #[test]
    fn wrong_prefix() {
        let ua = VALID.replace("iPhone; CPU iPhone OS", "iPad; CPU OS");
        expect_malformed(
            &ua,
            &format!("expected 'Mozilla/5.0 (iPhone; CPU iPhone OS ' at '{}'", ua),
        );
    }

    #[test]
    fn mismatched_os_versions() {
        let ua = VALID.replace("FBSV/18.3.2", "FBSV/18.3.1");
        expect_malformed(&ua, "OS version '18.3.2' differs from FBSV '18.3.1'");
    }

    #[test]
    fn underscore_os_version() {
        let ua = VALID.replace("18.3.2", "18_3_2");
        expect_malformed(&ua, "OS version '18_3_2' is not dotted");
    }

    #[test]
    fn empty_device_model() {
        let ua = VALID.replace("FBDV/iPhone17,1;", "FBDV/;");
        expect_malformed(&ua, "empty field 'FBDV'");
    }

    #[test]
    fn trailing_content() {
        let ua = format!("{}\n", VALID);
        expect_malformed(&ua, "trailing content '\n'");
    }

    #[test]
    fn truncated() {
        let ua = &VALID[..VALID.find("FBRV/").unwrap() + 8];
        expect_malformed(ua, "unterminated field 'FBRV'");
    }

    #[test]
    fn check_valid_agent() {
        let fields = check_user_agent(&REFERENCE_DATA, VALID).unwrap();
        assert_eq!(fields.device_model, "iPhone17,1");
    }

    #[test]
    fn check_device_from_other_major_version() {
        let ua = VALID.replace("FBDV/iPhone17,1;", "FBDV/iPhone15,4;");
        match check_user_agent(&REFERENCE_DATA, &ua) {
            Err(UaError::MalformedUserAgent { message }) => assert_eq!(
                message,
                "device 'iPhone15,4' is not compatible with OS version '18.3.2'"
            ),
            _ => assert_eq!(true, false),
        }
    }

    #[test]
    fn check_build_from_other_release() {
        let ua = VALID.replace("Mobile/22D82", "Mobile/22D72");
        match check_user_agent(&REFERENCE_DATA, &ua) {
            Err(UaError::MalformedUserAgent { message }) => assert_eq!(
                message,
                "build '22D72' does not belong to OS version '18.3.2'"
            ),
            _ => assert_eq!(true, false),
        }
    }

    #[test]
    fn check_unknown_release() {
        let ua = VALID.replace("18.3.2", "15.0");
        match check_user_agent(&REFERENCE_DATA, &ua) {
            Err(UaError::MalformedUserAgent { message }) => {
                assert_eq!(message, "unknown OS version '15.0'")
            }
            _ => assert_eq!(true, false),
        }
    }
}
