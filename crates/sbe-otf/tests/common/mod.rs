#![allow(dead_code)]

use sbe_buffers::{ByteOrder, Reader, Writer};
use sbe_ir::{
    Encoding, Ir, IrResult, PrimitiveType, Signal, Token, TokenListBuilder,
};
use sbe_otf::presence::{resolve_long, resolve_value};
use sbe_otf::types::decode_text;
use sbe_otf::{OtfResult, TokenListener};

pub const SCHEMA_ID: i64 = 1;
pub const CAR_TEMPLATE_ID: i32 = 1;
pub const HEADER_LENGTH: usize = 8;

pub fn leaf(name: &str, primitive_type: PrimitiveType, offset: usize, order: ByteOrder) -> Token {
    Token::builder(Signal::Encoding, name)
        .offset(offset)
        .encoded_length(primitive_type.size())
        .encoding(Encoding::of(primitive_type, order))
        .build()
}

pub fn field(name: &str, id: i32) -> Token {
    Token::builder(Signal::BeginField, name).id(id).build()
}

pub fn header_tokens(order: ByteOrder) -> Vec<Token> {
    let mut b = TokenListBuilder::new();
    b.begin(
        Token::builder(Signal::BeginComposite, "messageHeader")
            .encoded_length(HEADER_LENGTH)
            .build(),
    )
    .unwrap();
    for (i, name) in ["blockLength", "templateId", "schemaId", "version"]
        .iter()
        .enumerate()
    {
        b.push(leaf(name, PrimitiveType::Uint16, i * 2, order)).unwrap();
    }
    b.end(Signal::EndComposite).unwrap();
    b.build().unwrap()
}

/// Opens a group with a `uint16` block length and `uint16` count dimension.
pub fn begin_group(
    b: &mut TokenListBuilder,
    name: &str,
    id: i32,
    version: u32,
    block_length: usize,
    order: ByteOrder,
) -> IrResult<()> {
    b.begin(
        Token::builder(Signal::BeginGroup, name)
            .id(id)
            .version(version)
            .encoded_length(block_length)
            .build(),
    )?
    .begin(
        Token::builder(Signal::BeginComposite, "groupSizeEncoding")
            .encoded_length(4)
            .build(),
    )?
    .push(leaf("blockLength", PrimitiveType::Uint16, 0, order))?
    .push(leaf("numInGroup", PrimitiveType::Uint16, 2, order))?
    .end(Signal::EndComposite)?;
    Ok(())
}

/// Appends a var data field with a `uint16` length prefix.
pub fn var_data(
    b: &mut TokenListBuilder,
    name: &str,
    id: i32,
    version: u32,
    character_encoding: Option<&str>,
    order: ByteOrder,
) -> IrResult<()> {
    let mut data = Encoding::builder().primitive_type(PrimitiveType::Uint8).byte_order(order);
    if let Some(character_encoding) = character_encoding {
        data = data.character_encoding(character_encoding);
    }
    b.begin(
        Token::builder(Signal::BeginVarData, name)
            .id(id)
            .version(version)
            .build(),
    )?
    .begin(
        Token::builder(Signal::BeginComposite, "varStringEncoding")
            .encoded_length(Token::VARIABLE_LENGTH)
            .build(),
    )?
    .push(leaf("length", PrimitiveType::Uint16, 0, order))?
    .push(
        Token::builder(Signal::Encoding, "varData")
            .offset(2)
            .encoded_length(Token::VARIABLE_LENGTH)
            .encoding(data.build()?)
            .build(),
    )?
    .end(Signal::EndComposite)?
    .end(Signal::EndVarData)?;
    Ok(())
}

/// `Car { serialNumber: int32, fuelFigures: [{ speed: uint16, mpg: float }], activationCode }`
pub fn car_tokens(order: ByteOrder) -> Vec<Token> {
    let mut b = TokenListBuilder::new();
    b.begin(
        Token::builder(Signal::BeginMessage, "Car")
            .id(CAR_TEMPLATE_ID)
            .encoded_length(4)
            .build(),
    )
    .unwrap()
    .encoding_field(field("serialNumber", 1), leaf("int32", PrimitiveType::Int32, 0, order))
    .unwrap();
    begin_group(&mut b, "fuelFigures", 2, 0, 6, order).unwrap();
    b.encoding_field(field("speed", 3), leaf("uint16", PrimitiveType::Uint16, 0, order))
        .unwrap()
        .encoding_field(field("mpg", 4), leaf("float", PrimitiveType::Float, 2, order))
        .unwrap()
        .end(Signal::EndGroup)
        .unwrap();
    var_data(&mut b, "activationCode", 5, 0, Some("US-ASCII"), order).unwrap();
    b.end(Signal::EndMessage).unwrap();
    b.build().unwrap()
}

pub fn car_ir(order: ByteOrder) -> Ir {
    let mut ir = Ir::new("baseline", SCHEMA_ID, 0, header_tokens(order))
        .unwrap()
        .with_byte_order(order);
    ir.add_message(car_tokens(order)).unwrap();
    ir
}

pub fn encode_header(
    w: &mut Writer,
    offset: usize,
    block_length: u16,
    template_id: u16,
    schema_id: u16,
    version: u16,
    order: ByteOrder,
) -> usize {
    w.put_u16(offset, block_length, order);
    w.put_u16(offset + 2, template_id, order);
    w.put_u16(offset + 4, schema_id, order);
    w.put_u16(offset + 6, version, order);
    offset + HEADER_LENGTH
}

/// Encodes a `Car` body at `offset` and returns the index just past it.
pub fn encode_car(
    w: &mut Writer,
    offset: usize,
    serial_number: i32,
    fuel_figures: &[(u16, f32)],
    activation_code: &str,
    order: ByteOrder,
) -> usize {
    w.put_i32(offset, serial_number, order);
    let mut i = offset + 4;
    w.put_u16(i, 6, order);
    w.put_u16(i + 2, fuel_figures.len() as u16, order);
    i += 4;
    for (speed, mpg) in fuel_figures {
        w.put_u16(i, *speed, order);
        w.put_f32(i + 2, *mpg, order);
        i += 6;
    }
    w.put_u16(i, activation_code.len() as u16, order);
    i += 2;
    w.put_bytes(i, activation_code.as_bytes());
    i + activation_code.len()
}

/// Records every callback as one line of text.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<String>,
}

impl TokenListener for Recorder {
    fn on_begin_message(&mut self, token: &Token) -> OtfResult<()> {
        self.events.push(format!("begin_message {}", token.name()));
        Ok(())
    }

    fn on_end_message(&mut self, token: &Token) -> OtfResult<()> {
        self.events.push(format!("end_message {}", token.name()));
        Ok(())
    }

    fn on_encoding(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        type_token: &Token,
        acting_version: u32,
    ) -> OtfResult<()> {
        let value = resolve_value(buffer, index, type_token, acting_version)?;
        self.events
            .push(format!("encoding {} {}", field_token.name(), value));
        Ok(())
    }

    fn on_enum(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        tokens: &[Token],
        acting_version: u32,
    ) -> OtfResult<()> {
        let value = resolve_long(buffer, index, &tokens[0], acting_version)?;
        self.events.push(format!(
            "enum {} {} {}",
            field_token.name(),
            value,
            tokens.len()
        ));
        Ok(())
    }

    fn on_bit_set(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        tokens: &[Token],
        acting_version: u32,
    ) -> OtfResult<()> {
        let value = resolve_long(buffer, index, &tokens[0], acting_version)?;
        self.events.push(format!(
            "bit_set {} {:#b} {}",
            field_token.name(),
            value,
            tokens.len()
        ));
        Ok(())
    }

    fn on_begin_composite(&mut self, field_token: &Token, _tokens: &[Token]) -> OtfResult<()> {
        self.events
            .push(format!("begin_composite {}", field_token.name()));
        Ok(())
    }

    fn on_end_composite(&mut self, field_token: &Token, _tokens: &[Token]) -> OtfResult<()> {
        self.events.push(format!("end_composite {}", field_token.name()));
        Ok(())
    }

    fn on_group_header(&mut self, token: &Token, num_in_group: usize) -> OtfResult<()> {
        self.events
            .push(format!("group_header {} {}", token.name(), num_in_group));
        Ok(())
    }

    fn on_begin_group(
        &mut self,
        token: &Token,
        group_index: usize,
        _num_in_group: usize,
    ) -> OtfResult<()> {
        self.events
            .push(format!("begin_group {} {}", token.name(), group_index));
        Ok(())
    }

    fn on_end_group(
        &mut self,
        token: &Token,
        group_index: usize,
        _num_in_group: usize,
    ) -> OtfResult<()> {
        self.events
            .push(format!("end_group {} {}", token.name(), group_index));
        Ok(())
    }

    fn on_var_data(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        length: usize,
        type_token: &Token,
    ) -> OtfResult<()> {
        let bytes = buffer.get_bytes(index, length)?;
        let text = decode_text(
            bytes,
            type_token.encoding().character_encoding().unwrap_or("UTF-8"),
        )?;
        self.events.push(format!(
            "var_data {} {} {:?}",
            field_token.name(),
            length,
            text
        ));
        Ok(())
    }
}
