use core::fmt;

use log::{debug, trace};

use crate::{
    checksum::{calc_checksum, check_framing, validate_frame},
    constants::{
        UBX_CHECKSUM_LEN, UBX_CLASS_OFFSET, UBX_HEADER_LEN, UBX_MAX_PAYLOAD_LEN, UBX_MSG_ID_OFFSET,
        UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2,
    },
    error::{Result, UbxError},
    registry::Registry,
    schema::{Fields, Mode},
    value::Value,
};

/// How [`Registry::parse_with`] treats a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Decode with this mode's layout instead of matching on length
    pub mode: Option<Mode>,
    pub validate_checksum: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: None,
            validate_checksum: true,
        }
    }
}

impl ParseOptions {
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub const fn without_checksum(mut self) -> Self {
        self.validate_checksum = false;
        self
    }
}

/// One built or parsed UBX message
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UbxMessage {
    class: u8,
    id: u8,
    class_name: &'static str,
    name: &'static str,
    mode: Mode,
    payload: Vec<u8>,
    fields: Fields,
}

impl UbxMessage {
    pub fn msg_cls(&self) -> u8 {
        self.class
    }

    pub fn msg_id(&self) -> u8 {
        self.id
    }

    /// Payload length in bytes
    pub fn length(&self) -> u16 {
        // payload length is checked against the u16 limit on build and parse
        self.payload.len() as u16
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Message name, e.g. `NAV-PVT`
    pub fn identity(&self) -> &'static str {
        self.name
    }

    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// Decoded value of a field. Repeated fields carry their `_NN` suffix.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Fields in payload order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The complete frame, sync chars to checksum
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(UBX_HEADER_LEN + self.payload.len() + UBX_CHECKSUM_LEN);
        frame.extend_from_slice(&[UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2, self.class, self.id]);
        frame.extend_from_slice(&self.length().to_le_bytes());
        frame.extend_from_slice(&self.payload);
        let checksum = calc_checksum(&frame[UBX_CLASS_OFFSET..]);
        frame.extend_from_slice(&checksum);
        frame
    }
}

impl fmt::Display for UbxMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<UBX({}", self.name)?;
        for (name, value) in &self.fields {
            write!(f, ", {}={}", name, value)?;
        }
        f.write_str(")>")
    }
}

impl Registry {
    /// Builds a message from named field values.
    ///
    /// Fields the layout does not name are ignored and missing ones encode
    /// as zero.
    pub fn build(
        &self,
        class_name: &str,
        msg_name: &str,
        mode: Mode,
        fields: &[(&str, Value)],
    ) -> Result<UbxMessage> {
        let (class, id) = self.msgstr2bytes(class_name, msg_name)?;
        let (class_name, name) = self.message_name(class, id)?;
        let schema = self
            .schema(name, mode)
            .ok_or(UbxError::NoSchema { message: name, mode })?;

        let payload = schema.encode(fields, self.config_keys())?;
        let payload_length_error = || UbxError::PayloadLength {
            message: name.to_string(),
            len: payload.len(),
        };
        if payload.len() > UBX_MAX_PAYLOAD_LEN {
            return Err(payload_length_error());
        }
        let fields = schema
            .decode(&payload, self.config_keys())?
            .ok_or_else(payload_length_error)?;
        trace!("built {} {} with {} payload bytes", name, mode, payload.len());

        Ok(UbxMessage {
            class,
            id,
            class_name,
            name,
            mode,
            payload,
            fields,
        })
    }

    /// Parses one complete frame, validating its checksum.
    pub fn parse(&self, frame: &[u8]) -> Result<UbxMessage> {
        self.parse_with(frame, ParseOptions::default())
    }

    pub fn parse_with(&self, frame: &[u8], options: ParseOptions) -> Result<UbxMessage> {
        if options.validate_checksum {
            validate_frame(frame).inspect_err(|err| debug!("rejected frame: {}", err))?;
        }
        let len = check_framing(frame)?;
        let class = frame[UBX_CLASS_OFFSET];
        let id = frame[UBX_MSG_ID_OFFSET];
        let (class_name, name) = self.message_name(class, id)?;
        let payload = &frame[UBX_HEADER_LEN..UBX_HEADER_LEN + len];

        let (mode, fields) = match options.mode {
            Some(mode) => {
                let schema = self
                    .schema(name, mode)
                    .ok_or(UbxError::NoSchema { message: name, mode })?;
                let fields = schema.decode(payload, self.config_keys())?.ok_or_else(|| {
                    UbxError::PayloadLength {
                        message: name.to_string(),
                        len,
                    }
                })?;
                (mode, fields)
            },
            None => self.match_schema(name, payload)?,
        };
        trace!("parsed {} {} with {} payload bytes", name, mode, len);

        Ok(UbxMessage {
            class,
            id,
            class_name,
            name,
            mode,
            payload: payload.to_vec(),
            fields,
        })
    }

    /// Picks the layout for a payload: an exact fixed length first, then the
    /// first variable layout that consumes the payload.
    fn match_schema(&self, name: &'static str, payload: &[u8]) -> Result<(Mode, Fields)> {
        let candidates = Mode::ALL
            .iter()
            .filter_map(|mode| self.schema(name, *mode).map(|schema| (*mode, schema)));
        let fixed = candidates
            .clone()
            .filter(|(_, schema)| schema.fixed_len() == Some(payload.len()));
        let variable = candidates.filter(|(_, schema)| schema.fixed_len().is_none());

        for (mode, schema) in fixed.chain(variable) {
            match schema.decode(payload, self.config_keys()) {
                Ok(Some(fields)) => return Ok((mode, fields)),
                Ok(None) => debug!("{} {} does not fit {} bytes", name, mode, payload.len()),
                Err(err) => debug!("{} {} rejected: {}", name, mode, err),
            }
        }
        Err(UbxError::PayloadLength {
            message: name.to_string(),
            len: payload.len(),
        })
    }
}
