//! Parser für Session-Dokumente.
//!
//! Ein fehlerhaftes Command-Log bricht das Laden komplett ab: ein beschädigtes
//! Log kann nicht teilweise übernommen werden.

use super::*;
use crate::app::{CmdSettingsCoords, DocumentCommand};
use crate::core::{validate, CoordScale, CoordsSettings, CoordsType, PolarThetaUnits};
use anyhow::{anyhow, bail, Context, Result};
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;

/// Inhalt einer geladenen Session-Datei
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDocument {
    /// Zuletzt angewendete Einstellungen (maßgeblich, werden nicht neu berechnet)
    pub coords: CoordsSettings,
    /// Command-Log in History-Reihenfolge
    pub commands: Vec<DocumentCommand>,
    /// Cursor der History, `<= commands.len()`
    pub cursor: usize,
}

/// Sammelt Before/After eines `<CmdSettingsCoords>`-Records in fester Reihenfolge.
#[derive(Default)]
struct CoordsRecordBuilder {
    before: Option<CoordsSettings>,
    after: Option<CoordsSettings>,
}

impl CoordsRecordBuilder {
    fn snapshot(&mut self, tag: &str, settings: CoordsSettings) -> Result<()> {
        match tag {
            TAG_BEFORE => {
                if self.before.is_some() || self.after.is_some() {
                    bail!("<{}> doppelt oder nach <{}>", TAG_BEFORE, TAG_AFTER);
                }
                self.before = Some(settings);
            }
            TAG_AFTER => {
                if self.before.is_none() {
                    bail!("<{}> vor <{}>", TAG_AFTER, TAG_BEFORE);
                }
                if self.after.is_some() {
                    bail!("<{}> doppelt", TAG_AFTER);
                }
                self.after = Some(settings);
            }
            other => bail!("Unerwartetes Element in <{}>: <{}>", TAG_CMD_SETTINGS_COORDS, other),
        }
        Ok(())
    }

    /// Ein Record enthält nur Snapshot-Elemente, niemals Text.
    fn text(&self, e: &BytesText) -> Result<()> {
        let text = e.xml_content()?;
        bail!("Unerwarteter Text in <{}>: '{}'", TAG_CMD_SETTINGS_COORDS, text)
    }

    fn finish(self) -> Result<DocumentCommand> {
        match (self.before, self.after) {
            (Some(before), Some(after)) => Ok(CmdSettingsCoords::new(before, after).into()),
            (None, _) => bail!("<{}> ohne <{}>", TAG_CMD_SETTINGS_COORDS, TAG_BEFORE),
            (Some(_), None) => bail!("<{}> ohne <{}>", TAG_CMD_SETTINGS_COORDS, TAG_AFTER),
        }
    }
}

/// Zustand beim Durchlaufen eines Session-Dokuments.
#[derive(Default)]
struct SessionParser {
    document_seen: bool,
    in_document: bool,
    coords: Option<CoordsSettings>,
    commands_seen: bool,
    in_commands: bool,
    cursor: usize,
    commands: Vec<DocumentCommand>,
    record: Option<CoordsRecordBuilder>,
}

impl SessionParser {
    fn element(&mut self, reader: &Reader<&[u8]>, e: &BytesStart, is_empty: bool) -> Result<()> {
        let name = e.name();
        let tag = reader.decoder().decode(name.as_ref())?.into_owned();
        let record_no = self.commands.len() + 1;

        if let Some(builder) = self.record.as_mut() {
            let settings = parse_snapshot(reader, e)
                .with_context(|| format!("Ungültiger Snapshot <{}>", tag))?;
            builder
                .snapshot(&tag, settings)
                .with_context(|| format!("Ungültiger Command-Record #{}", record_no))?;
        } else if tag == TAG_DOCUMENT {
            if self.document_seen {
                bail!("Mehrere <{}>-Elemente", TAG_DOCUMENT);
            }
            let version = required_attribute(reader, e, ATTR_VERSION)?;
            if version.trim() != SESSION_FORMAT_VERSION.to_string() {
                bail!("Nicht unterstützte Session-Version: '{}'", version);
            }
            self.document_seen = true;
            self.in_document = !is_empty;
        } else if !self.in_document {
            bail!("Element <{}> außerhalb von <{}>", tag, TAG_DOCUMENT);
        } else if self.in_commands {
            if tag != TAG_CMD_SETTINGS_COORDS {
                bail!("Unbekannter Command: <{}>", tag);
            }
            if is_empty {
                bail!(
                    "Ungültiger Command-Record #{}: <{}> ohne Snapshots",
                    record_no,
                    tag
                );
            }
            self.record = Some(CoordsRecordBuilder::default());
        } else if tag == TAG_COORDS {
            if self.coords.is_some() {
                bail!("Mehrere <{}>-Elemente", TAG_COORDS);
            }
            let coords = parse_snapshot(reader, e)
                .with_context(|| format!("Ungültiges <{}>", TAG_COORDS))?;
            self.coords = Some(coords);
        } else if tag == TAG_COMMANDS {
            if self.commands_seen {
                bail!("Mehrere <{}>-Elemente", TAG_COMMANDS);
            }
            let text = required_attribute(reader, e, ATTR_CURSOR)?;
            self.cursor = text
                .trim()
                .parse()
                .with_context(|| format!("Ungültiger History-Cursor: '{}'", text))?;
            self.commands_seen = true;
            self.in_commands = !is_empty;
        } else {
            log::debug!("Unbekanntes Session-Element ignoriert: <{}>", tag);
        }
        Ok(())
    }

    fn end(&mut self, tag: &str) -> Result<()> {
        match tag {
            TAG_CMD_SETTINGS_COORDS => {
                if let Some(builder) = self.record.take() {
                    let record_no = self.commands.len() + 1;
                    let cmd = builder
                        .finish()
                        .with_context(|| format!("Ungültiger Command-Record #{}", record_no))?;
                    self.commands.push(cmd);
                }
            }
            TAG_COMMANDS => self.in_commands = false,
            TAG_DOCUMENT => self.in_document = false,
            _ => {}
        }
        Ok(())
    }

    fn text(&self, e: &BytesText) -> Result<()> {
        if let Some(builder) = self.record.as_ref() {
            let record_no = self.commands.len() + 1;
            return builder
                .text(e)
                .with_context(|| format!("Ungültiger Command-Record #{}", record_no));
        }
        if self.in_commands {
            let text = e.xml_content()?;
            bail!("Unerwarteter Text im Command-Log: '{}'", text);
        }
        Ok(())
    }

    fn finish(self) -> Result<SessionDocument> {
        if !self.document_seen {
            bail!("Kein <{}>-Element gefunden", TAG_DOCUMENT);
        }
        if self.record.is_some() || self.in_commands || self.in_document {
            bail!("Session-Datei endet unerwartet");
        }
        let coords = self
            .coords
            .ok_or_else(|| anyhow!("Pflichtelement <{}> fehlt", TAG_COORDS))?;
        if self.cursor > self.commands.len() {
            bail!(
                "History-Cursor {} liegt hinter dem Ende ({} Commands)",
                self.cursor,
                self.commands.len()
            );
        }
        Ok(SessionDocument {
            coords,
            commands: self.commands,
            cursor: self.cursor,
        })
    }
}

/// Parsed eine Session aus einem XML-String
pub fn parse_session(xml_content: &str) -> Result<SessionDocument> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();
    let mut parser = SessionParser::default();

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => parser.element(&reader, e, false)?,
            Ok(Event::Empty(ref e)) => parser.element(&reader, e, true)?,
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?;
                parser.end(&tag)?;
            }
            Ok(Event::Text(e)) => parser.text(&e)?,
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des XML"),
            _ => {}
        }

        buffer.clear();
    }

    let session = parser.finish()?;
    log::info!(
        "Session gelesen: {} Commands, Cursor {}",
        session.commands.len(),
        session.cursor
    );
    Ok(session)
}

/// Parsed einen einzelnen `<CmdSettingsCoords>`-Record (Gegenstück zu
/// [`write_command`](super::write_command)).
pub fn parse_command(xml_content: &str) -> Result<DocumentCommand> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();
    let mut record: Option<CoordsRecordBuilder> = None;
    let mut result: Option<DocumentCommand> = None;

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?.into_owned();

                if result.is_some() {
                    bail!("Mehr als ein Command-Record");
                }
                if let Some(builder) = record.as_mut() {
                    let settings = parse_snapshot(&reader, e)
                        .with_context(|| format!("Ungültiger Snapshot <{}>", tag))?;
                    builder.snapshot(&tag, settings)?;
                } else if tag == TAG_CMD_SETTINGS_COORDS {
                    record = Some(CoordsRecordBuilder::default());
                } else {
                    bail!("Unbekannter Command: <{}>", tag);
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?;
                if tag == TAG_CMD_SETTINGS_COORDS {
                    if let Some(builder) = record.take() {
                        result = Some(builder.finish()?);
                    }
                }
            }
            Ok(Event::Text(e)) => match record.as_ref() {
                Some(builder) => builder.text(&e)?,
                None => bail!("Unerwarteter Text außerhalb des Command-Records"),
            },
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des XML"),
            _ => {}
        }

        buffer.clear();
    }

    if record.is_some() {
        bail!("Command-Record endet unerwartet");
    }
    result.ok_or_else(|| anyhow!("Kein Command-Record gefunden"))
}

/// Liest die fünf Snapshot-Attribute eines Elements und prüft sie mit [`validate`].
fn parse_snapshot(reader: &Reader<&[u8]>, element: &BytesStart) -> Result<CoordsSettings> {
    let mut coords_type: Option<CoordsType> = None;
    let mut scale_x_theta: Option<CoordScale> = None;
    let mut scale_y_radius: Option<CoordScale> = None;
    let mut units_theta: Option<PolarThetaUnits> = None;
    let mut origin_radius: Option<f64> = None;

    for attr in element.attributes() {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?.into_owned();
        let value = attr.unescape_value()?.into_owned();

        match key.as_str() {
            ATTR_TYPE => {
                coords_type = Some(
                    CoordsType::from_token(&value)
                        .ok_or_else(|| anyhow!("Unbekannter Koordinatentyp: '{}'", value))?,
                )
            }
            ATTR_SCALE_X_THETA => scale_x_theta = Some(parse_scale(&value)?),
            ATTR_SCALE_Y_RADIUS => scale_y_radius = Some(parse_scale(&value)?),
            ATTR_UNITS_THETA => {
                units_theta = Some(
                    PolarThetaUnits::from_token(&value)
                        .ok_or_else(|| anyhow!("Unbekannte Theta-Einheit: '{}'", value))?,
                )
            }
            ATTR_ORIGIN_RADIUS => {
                let radius: f64 = value
                    .trim()
                    .parse()
                    .with_context(|| format!("Ungültiger Ursprungsradius: '{}'", value))?;
                origin_radius = Some(radius);
            }
            _ => {}
        }
    }

    let settings = CoordsSettings {
        coords_type: coords_type.ok_or_else(|| missing(ATTR_TYPE))?,
        scale_x_theta: scale_x_theta.ok_or_else(|| missing(ATTR_SCALE_X_THETA))?,
        scale_y_radius: scale_y_radius.ok_or_else(|| missing(ATTR_SCALE_Y_RADIUS))?,
        units_theta: units_theta.ok_or_else(|| missing(ATTR_UNITS_THETA))?,
        origin_radius: origin_radius.ok_or_else(|| missing(ATTR_ORIGIN_RADIUS))?,
    };
    // Geladene Snapshots unterliegen denselben Regeln wie Formular-Eingaben
    validate(&settings).context("Snapshot verletzt die Einstellungs-Regeln")?;
    Ok(settings)
}

fn parse_scale(value: &str) -> Result<CoordScale> {
    CoordScale::from_token(value).ok_or_else(|| anyhow!("Unbekannte Skala: '{}'", value))
}

fn required_attribute(reader: &Reader<&[u8]>, element: &BytesStart, key: &str) -> Result<String> {
    for attr in element.attributes() {
        let attr = attr?;
        if reader.decoder().decode(attr.key.as_ref())? == key {
            return Ok(attr.unescape_value()?.into_owned());
        }
    }
    Err(missing(key))
}

fn missing(key: &str) -> anyhow::Error {
    anyhow!("Pflichtattribut '{}' fehlt", key)
}
