//! AXL SOAP envelope construction and response parsing.
//!
//! Every list operation shares one request shape: a `searchCriteria` block
//! of field/mask pairs and a `returnedTags` block naming the fields wanted
//! back. Responses carry zero or more record elements under `<return>`, each
//! with text-only children; faults carry a `<faultstring>`.

use crate::utils::error::{GatorError, Result};
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::collections::HashMap;
use std::io::Cursor;

pub const AXL_NAMESPACE: &str = "http://www.cisco.com/AXL/API/12.5";
pub const AXL_VERSION: &str = "12.5";

fn xml_err(e: impl std::fmt::Display) -> GatorError {
    GatorError::XmlError {
        message: e.to_string(),
    }
}

/// Builds the SOAP 1.1 envelope for one AXL list operation.
pub fn build_list_request(
    operation: &str,
    search_criteria: &[(&str, &str)],
    returned_tags: &[&str],
) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let mut envelope = BytesStart::new("soapenv:Envelope");
    envelope.push_attribute(("xmlns:soapenv", "http://schemas.xmlsoap.org/soap/envelope/"));
    envelope.push_attribute(("xmlns:axl", AXL_NAMESPACE));
    writer.write_event(Event::Start(envelope)).map_err(xml_err)?;

    writer
        .write_event(Event::Empty(BytesStart::new("soapenv:Header")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Start(BytesStart::new("soapenv:Body")))
        .map_err(xml_err)?;

    let op_tag = format!("axl:{}", operation);
    writer
        .write_event(Event::Start(BytesStart::new(op_tag.as_str())))
        .map_err(xml_err)?;

    writer
        .write_event(Event::Start(BytesStart::new("searchCriteria")))
        .map_err(xml_err)?;
    for (field, mask) in search_criteria {
        writer
            .write_event(Event::Start(BytesStart::new(*field)))
            .map_err(xml_err)?;
        writer
            .write_event(Event::Text(BytesText::new(mask)))
            .map_err(xml_err)?;
        writer
            .write_event(Event::End(BytesStart::new(*field).to_end()))
            .map_err(xml_err)?;
    }
    writer
        .write_event(Event::End(BytesStart::new("searchCriteria").to_end()))
        .map_err(xml_err)?;

    writer
        .write_event(Event::Start(BytesStart::new("returnedTags")))
        .map_err(xml_err)?;
    for tag in returned_tags {
        writer
            .write_event(Event::Empty(BytesStart::new(*tag)))
            .map_err(xml_err)?;
    }
    writer
        .write_event(Event::End(BytesStart::new("returnedTags").to_end()))
        .map_err(xml_err)?;

    writer
        .write_event(Event::End(BytesStart::new(op_tag.as_str()).to_end()))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesStart::new("soapenv:Body").to_end()))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesStart::new("soapenv:Envelope").to_end()))
        .map_err(xml_err)?;

    let xml = writer.into_inner().into_inner();
    String::from_utf8(xml).map_err(xml_err)
}

/// Parses a list response, collecting every `<record_tag>` element under
/// `<return>` into a field/text map. A `<faultstring>` anywhere in the
/// document turns into `GatorError::SoapFault`. An empty or absent
/// `<return>` yields an empty list.
pub fn parse_list_response(xml: &str, record_tag: &str) -> Result<Vec<HashMap<String, String>>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut records: Vec<HashMap<String, String>> = Vec::new();
    let mut current: Option<HashMap<String, String>> = None;
    let mut field: Option<String> = None;
    let mut in_fault = false;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if name == record_tag && current.is_none() {
                    current = Some(HashMap::new());
                } else if current.is_some() {
                    field = Some(name);
                } else if name == "faultstring" {
                    in_fault = true;
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(xml_err)?.into_owned();
                if in_fault {
                    return Err(GatorError::SoapFault { message: text });
                }
                if let (Some(record), Some(name)) = (current.as_mut(), field.as_ref()) {
                    record.insert(name.clone(), text);
                }
            }
            Ok(Event::Empty(ref e)) => {
                // `<faultstring/>` still signals failure.
                if current.is_none() && e.local_name().as_ref() == b"faultstring" {
                    return Err(GatorError::SoapFault {
                        message: "unspecified AXL fault".to_string(),
                    });
                }
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if name == record_tag {
                    if let Some(record) = current.take() {
                        records.push(record);
                    }
                } else if name == "faultstring" {
                    // Empty faultstring still signals failure.
                    if in_fault {
                        return Err(GatorError::SoapFault {
                            message: "unspecified AXL fault".to_string(),
                        });
                    }
                } else {
                    field = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_criteria_and_tags() {
        let xml = build_list_request(
            "listLine",
            &[("description", "%")],
            &["pattern", "description"],
        )
        .unwrap();

        assert!(xml.starts_with("<soapenv:Envelope"));
        assert!(xml.contains("xmlns:axl=\"http://www.cisco.com/AXL/API/12.5\""));
        assert!(xml.contains("<axl:listLine>"));
        assert!(xml.contains("<searchCriteria><description>%</description></searchCriteria>"));
        assert!(xml.contains("<returnedTags><pattern/><description/></returnedTags>"));
        assert!(xml.ends_with("</soapenv:Envelope>"));
    }

    #[test]
    fn request_escapes_mask_text() {
        let xml = build_list_request("listPhone", &[("description", "%A&B<C%")], &["name"]).unwrap();
        assert!(xml.contains("%A&amp;B&lt;C%"));
    }

    #[test]
    fn parses_multiple_records() {
        let xml = r#"<?xml version="1.0"?>
            <soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
              <soapenv:Body>
                <ns:listLineResponse xmlns:ns="http://www.cisco.com/AXL/API/12.5">
                  <return>
                    <line uuid="{1}"><pattern>1001</pattern><description>Campus A - John Smith - 1001</description></line>
                    <line uuid="{2}"><pattern>1002</pattern><description/></line>
                  </return>
                </ns:listLineResponse>
              </soapenv:Body>
            </soapenv:Envelope>"#;

        let records = parse_list_response(xml, "line").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["pattern"], "1001");
        assert_eq!(records[0]["description"], "Campus A - John Smith - 1001");
        assert_eq!(records[1]["pattern"], "1002");
        // Self-closing description yields no entry at all.
        assert!(!records[1].contains_key("description"));
    }

    #[test]
    fn empty_return_yields_no_records() {
        let xml = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
              <soapenv:Body>
                <ns:listPhoneResponse xmlns:ns="http://www.cisco.com/AXL/API/12.5">
                  <return/>
                </ns:listPhoneResponse>
              </soapenv:Body>
            </soapenv:Envelope>"#;

        assert!(parse_list_response(xml, "phone").unwrap().is_empty());
    }

    #[test]
    fn faultstring_becomes_soap_fault() {
        let xml = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
              <soapenv:Body>
                <soapenv:Fault>
                  <faultcode>soapenv:Client</faultcode>
                  <faultstring>Authentication failed</faultstring>
                </soapenv:Fault>
              </soapenv:Body>
            </soapenv:Envelope>"#;

        let err = parse_list_response(xml, "line").unwrap_err();
        match err {
            GatorError::SoapFault { message } => assert_eq!(message, "Authentication failed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn self_closing_faultstring_is_still_a_fault() {
        let xml = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
              <soapenv:Body>
                <soapenv:Fault>
                  <faultcode>soapenv:Server</faultcode>
                  <faultstring/>
                </soapenv:Fault>
              </soapenv:Body>
            </soapenv:Envelope>"#;

        let err = parse_list_response(xml, "line").unwrap_err();
        match err {
            GatorError::SoapFault { message } => assert_eq!(message, "unspecified AXL fault"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_faultstring_element_is_still_a_fault() {
        let xml = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
              <soapenv:Body>
                <soapenv:Fault><faultstring></faultstring></soapenv:Fault>
              </soapenv:Body>
            </soapenv:Envelope>"#;

        let err = parse_list_response(xml, "line").unwrap_err();
        assert!(matches!(err, GatorError::SoapFault { .. }));
    }

    #[test]
    fn mismatched_tags_are_an_xml_error() {
        let xml = "<return><line><pattern>1001</wrong></line></return>";
        let err = parse_list_response(xml, "line").unwrap_err();
        assert!(matches!(err, GatorError::XmlError { .. }));
    }
}
