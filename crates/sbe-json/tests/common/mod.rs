#![allow(dead_code)]

use sbe_buffers::{ByteOrder, Writer};
use sbe_ir::{
    Encoding, Ir, IrResult, Presence, PrimitiveType, PrimitiveValue, Signal, Token,
    TokenListBuilder,
};

pub const SCHEMA_ID: i64 = 1;
pub const SCHEMA_VERSION: u32 = 1;
pub const CAR_TEMPLATE_ID: i32 = 1;
pub const CAR_BLOCK_LENGTH: usize = 45;
pub const HEADER_LENGTH: usize = 8;

const ORDER: ByteOrder = ByteOrder::LittleEndian;

fn leaf(name: &str, primitive_type: PrimitiveType, offset: usize) -> Token {
    array(name, primitive_type, offset, 1)
}

fn array(name: &str, primitive_type: PrimitiveType, offset: usize, length: usize) -> Token {
    Token::builder(Signal::Encoding, name)
        .offset(offset)
        .encoded_length(primitive_type.size() * length)
        .encoding(Encoding::of(primitive_type, ORDER))
        .build()
}

fn constant(
    name: &str,
    primitive_type: PrimitiveType,
    offset: usize,
    text: &str,
) -> IrResult<Token> {
    let encoding = Encoding::builder()
        .primitive_type(primitive_type)
        .presence(Presence::Constant)
        .const_value(PrimitiveValue::parse(primitive_type, text)?)
        .build()?;
    Ok(Token::builder(Signal::Encoding, name)
        .offset(offset)
        .encoding(encoding)
        .build())
}

fn field(name: &str, id: i32) -> Token {
    Token::builder(Signal::BeginField, name).id(id).build()
}

fn enumeration(
    b: &mut TokenListBuilder,
    begin: Token,
    primitive_type: PrimitiveType,
    values: &[(&str, &str)],
) -> IrResult<()> {
    b.begin(begin)?;
    for (name, value) in values {
        let encoding = Encoding::builder()
            .primitive_type(primitive_type)
            .presence(Presence::Constant)
            .const_value(PrimitiveValue::parse(primitive_type, value)?)
            .build()?;
        b.push(Token::builder(Signal::ValidValue, *name).encoding(encoding).build())?;
    }
    b.end(Signal::EndEnum)?;
    Ok(())
}

fn enum_token(name: &str, type_name: &str, primitive_type: PrimitiveType, offset: usize) -> Token {
    Token::builder(Signal::BeginEnum, name)
        .referenced_name(type_name)
        .offset(offset)
        .encoded_length(primitive_type.size())
        .encoding(Encoding::of(primitive_type, ORDER))
        .build()
}

const MODEL: &[(&str, &str)] = &[("A", "A"), ("B", "B"), ("C", "C")];

fn begin_group(b: &mut TokenListBuilder, name: &str, id: i32, block_length: usize) -> IrResult<()> {
    b.begin(
        Token::builder(Signal::BeginGroup, name)
            .id(id)
            .encoded_length(block_length)
            .build(),
    )?
    .begin(
        Token::builder(Signal::BeginComposite, "groupSizeEncoding")
            .encoded_length(4)
            .build(),
    )?
    .push(leaf("blockLength", PrimitiveType::Uint16, 0))?
    .push(leaf("numInGroup", PrimitiveType::Uint16, 2))?
    .end(Signal::EndComposite)?;
    Ok(())
}

fn var_data(
    b: &mut TokenListBuilder,
    name: &str,
    id: i32,
    character_encoding: Option<&str>,
) -> IrResult<()> {
    let mut data = Encoding::builder().primitive_type(PrimitiveType::Uint8);
    if let Some(character_encoding) = character_encoding {
        data = data.character_encoding(character_encoding);
    }
    b.begin(Token::builder(Signal::BeginVarData, name).id(id).build())?
        .begin(
            Token::builder(Signal::BeginComposite, "varDataEncoding")
                .encoded_length(Token::VARIABLE_LENGTH)
                .build(),
        )?
        .push(leaf("length", PrimitiveType::Uint16, 0))?
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

pub fn header_tokens() -> IrResult<Vec<Token>> {
    let mut b = TokenListBuilder::new();
    b.begin(
        Token::builder(Signal::BeginComposite, "messageHeader")
            .encoded_length(HEADER_LENGTH)
            .build(),
    )?;
    for (i, name) in ["blockLength", "templateId", "schemaId", "version"]
        .iter()
        .enumerate()
    {
        b.push(leaf(name, PrimitiveType::Uint16, i * 2))?;
    }
    b.end(Signal::EndComposite)?;
    b.build()
}

pub fn car_tokens() -> IrResult<Vec<Token>> {
    let mut b = TokenListBuilder::new();
    b.begin(
        Token::builder(Signal::BeginMessage, "Car")
            .id(CAR_TEMPLATE_ID)
            .encoded_length(CAR_BLOCK_LENGTH)
            .build(),
    )?
    .encoding_field(field("serialNumber", 1), leaf("uint64", PrimitiveType::Uint64, 0))?
    .encoding_field(field("modelYear", 2), leaf("uint16", PrimitiveType::Uint16, 8))?
    .begin(field("available", 3))?;
    enumeration(
        &mut b,
        enum_token("BooleanType", "BooleanType", PrimitiveType::Uint8, 10),
        PrimitiveType::Uint8,
        &[("F", "0"), ("T", "1")],
    )?;
    b.end(Signal::EndField)?.begin(field("code", 4))?;
    enumeration(
        &mut b,
        enum_token("Model", "Model", PrimitiveType::Char, 11),
        PrimitiveType::Char,
        MODEL,
    )?;
    b.end(Signal::EndField)?
        .encoding_field(field("someNumbers", 5), array("uint32", PrimitiveType::Uint32, 12, 4))?
        .encoding_field(field("vehicleCode", 6), array("char", PrimitiveType::Char, 28, 6))?
        .begin(field("extras", 7))?
        .begin(
            Token::builder(Signal::BeginSet, "OptionalExtras")
                .offset(34)
                .encoded_length(1)
                .encoding(Encoding::of(PrimitiveType::Uint8, ORDER))
                .build(),
        )?;
    for (bit, choice) in ["sunRoof", "sportsPack", "cruiseControl"].iter().enumerate() {
        let encoding = Encoding::builder()
            .primitive_type(PrimitiveType::Uint8)
            .presence(Presence::Constant)
            .const_value(PrimitiveValue::UInt(bit as u64))
            .build()?;
        b.push(Token::builder(Signal::Choice, *choice).encoding(encoding).build())?;
    }
    b.end(Signal::EndSet)?
        .end(Signal::EndField)?
        .begin(field("discountedModel", 8))?;
    let discounted = Encoding::builder()
        .primitive_type(PrimitiveType::Char)
        .presence(Presence::Constant)
        .const_value(PrimitiveValue::parse(PrimitiveType::Char, "C")?)
        .build()?;
    enumeration(
        &mut b,
        Token::builder(Signal::BeginEnum, "Model")
            .offset(35)
            .encoding(discounted)
            .build(),
        PrimitiveType::Char,
        MODEL,
    )?;
    b.end(Signal::EndField)?
        .begin(field("engine", 9))?
        .begin(
            Token::builder(Signal::BeginComposite, "Engine")
                .offset(35)
                .encoded_length(8)
                .build(),
        )?
        .push(leaf("capacity", PrimitiveType::Uint16, 0))?
        .push(constant("maxRpm", PrimitiveType::Uint16, 3, "9000")?)?
        .push(leaf("numCylinders", PrimitiveType::Uint8, 2))?
        .push(array("manufacturerCode", PrimitiveType::Char, 3, 3))?
        .push(constant("fuel", PrimitiveType::Char, 6, "Petrol")?)?
        .begin(
            Token::builder(Signal::BeginComposite, "booster")
                .referenced_name("Booster")
                .offset(6)
                .encoded_length(2)
                .build(),
        )?;
    enumeration(
        &mut b,
        enum_token("boostType", "BoostType", PrimitiveType::Char, 0),
        PrimitiveType::Char,
        &[("TURBO", "T"), ("SUPERCHARGER", "S"), ("NITROUS", "N"), ("KERS", "K")],
    )?;
    b.push(leaf("horsePower", PrimitiveType::Uint8, 1))?
        .end(Signal::EndComposite)?
        .end(Signal::EndComposite)?
        .end(Signal::EndField)?;
    let rating = Encoding::builder()
        .primitive_type(PrimitiveType::Int8)
        .presence(Presence::Optional)
        .build()?;
    b.encoding_field(
        Token::builder(Signal::BeginField, "rating").id(10).version(1).build(),
        Token::builder(Signal::Encoding, "int8")
            .offset(43)
            .version(1)
            .encoded_length(1)
            .encoding(rating)
            .build(),
    )?;

    begin_group(&mut b, "fuelFigures", 11, 6)?;
    b.encoding_field(field("speed", 12), leaf("uint16", PrimitiveType::Uint16, 0))?
        .encoding_field(field("mpg", 13), leaf("float", PrimitiveType::Float, 2))?
        .end(Signal::EndGroup)?;

    begin_group(&mut b, "performanceFigures", 14, 1)?;
    b.encoding_field(field("octaneRating", 15), leaf("uint8", PrimitiveType::Uint8, 0))?;
    begin_group(&mut b, "acceleration", 16, 6)?;
    b.encoding_field(field("mph", 17), leaf("uint16", PrimitiveType::Uint16, 0))?
        .encoding_field(field("seconds", 18), leaf("float", PrimitiveType::Float, 2))?
        .end(Signal::EndGroup)?
        .end(Signal::EndGroup)?;

    var_data(&mut b, "manufacturer", 19, Some("UTF-8"))?;
    var_data(&mut b, "model", 20, Some("UTF-8"))?;
    var_data(&mut b, "activationCode", 21, None)?;
    b.end(Signal::EndMessage)?;
    b.build()
}

pub fn car_ir() -> Ir {
    let mut ir = Ir::new("baseline", SCHEMA_ID, SCHEMA_VERSION, header_tokens().unwrap())
        .unwrap()
        .with_semantic_version("5.2");
    ir.add_message(car_tokens().unwrap()).unwrap();
    ir
}

#[derive(Debug, Clone)]
pub struct Car {
    pub serial_number: u64,
    pub model_year: u16,
    pub available: u8,
    pub code: u8,
    pub some_numbers: [u32; 4],
    pub vehicle_code: [u8; 6],
    pub extras: u8,
    pub capacity: u16,
    pub num_cylinders: u8,
    pub manufacturer_code: [u8; 3],
    pub boost_type: u8,
    pub horse_power: u8,
    pub rating: i8,
    pub fuel_figures: Vec<(u16, f32)>,
    pub performance_figures: Vec<(u8, Vec<(u16, f32)>)>,
    pub manufacturer: String,
    pub model: String,
    pub activation_code: Vec<u8>,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            serial_number: 1234,
            model_year: 2013,
            available: 1,
            code: b'A',
            some_numbers: [0, 1, 2, 3],
            vehicle_code: *b"abcdef",
            extras: 0b101,
            capacity: 2000,
            num_cylinders: 4,
            manufacturer_code: *b"123",
            boost_type: b'N',
            horse_power: 200,
            rating: -128,
            fuel_figures: vec![(30, 35.9), (55, 49.0), (75, 40.0)],
            performance_figures: vec![
                (95, vec![(30, 4.0), (60, 7.5), (100, 12.2)]),
                (99, vec![(30, 3.8)]),
            ],
            manufacturer: "Honda".into(),
            model: "Civic VTi".into(),
            activation_code: vec![0xde, 0xad, 0xbe, 0xef],
        }
    }
}

fn put_var(w: &mut Writer, index: usize, bytes: &[u8]) -> usize {
    w.put_u16(index, bytes.len() as u16, ORDER);
    w.put_bytes(index + 2, bytes);
    index + 2 + bytes.len()
}

/// Writes a message header at `offset` and returns the index of the root block.
pub fn encode_header(
    w: &mut Writer,
    offset: usize,
    block_length: usize,
    template_id: i32,
    schema_id: u16,
    version: u16,
) -> usize {
    w.put_u16(offset, block_length as u16, ORDER);
    w.put_u16(offset + 2, template_id as u16, ORDER);
    w.put_u16(offset + 4, schema_id, ORDER);
    w.put_u16(offset + 6, version, ORDER);
    offset + HEADER_LENGTH
}

/// Encodes header and body at `offset` and returns the index just past them.
pub fn encode_car(w: &mut Writer, offset: usize, car: &Car, schema_id: u16, version: u16) -> usize {
    let root = encode_header(w, offset, CAR_BLOCK_LENGTH, CAR_TEMPLATE_ID, schema_id, version);
    w.put_u64(root, car.serial_number, ORDER);
    w.put_u16(root + 8, car.model_year, ORDER);
    w.put_u8(root + 10, car.available);
    w.put_u8(root + 11, car.code);
    for (i, n) in car.some_numbers.iter().enumerate() {
        w.put_u32(root + 12 + i * 4, *n, ORDER);
    }
    w.put_bytes(root + 28, &car.vehicle_code);
    w.put_u8(root + 34, car.extras);
    w.put_u16(root + 35, car.capacity, ORDER);
    w.put_u8(root + 37, car.num_cylinders);
    w.put_bytes(root + 38, &car.manufacturer_code);
    w.put_u8(root + 41, car.boost_type);
    w.put_u8(root + 42, car.horse_power);
    w.put_i8(root + 43, car.rating);
    w.put_u8(root + 44, 0);

    let mut i = root + CAR_BLOCK_LENGTH;
    w.put_u16(i, 6, ORDER);
    w.put_u16(i + 2, car.fuel_figures.len() as u16, ORDER);
    i += 4;
    for (speed, mpg) in &car.fuel_figures {
        w.put_u16(i, *speed, ORDER);
        w.put_f32(i + 2, *mpg, ORDER);
        i += 6;
    }

    w.put_u16(i, 1, ORDER);
    w.put_u16(i + 2, car.performance_figures.len() as u16, ORDER);
    i += 4;
    for (octane, acceleration) in &car.performance_figures {
        w.put_u8(i, *octane);
        i += 1;
        w.put_u16(i, 6, ORDER);
        w.put_u16(i + 2, acceleration.len() as u16, ORDER);
        i += 4;
        for (mph, seconds) in acceleration {
            w.put_u16(i, *mph, ORDER);
            w.put_f32(i + 2, *seconds, ORDER);
            i += 6;
        }
    }

    i = put_var(w, i, car.manufacturer.as_bytes());
    i = put_var(w, i, car.model.as_bytes());
    put_var(w, i, &car.activation_code)
}

pub const GAUGE_TEMPLATE_ID: i32 = 2;
pub const GAUGE_BLOCK_LENGTH: usize = 20;

/// `Gauge`: `id` uint32 at 0, then `readings`, an optional int32[4] added in
/// version 3.
pub fn gauge_ir() -> Ir {
    let readings = Encoding::builder()
        .primitive_type(PrimitiveType::Int32)
        .presence(Presence::Optional)
        .build()
        .unwrap();
    let mut b = TokenListBuilder::new();
    b.begin(
        Token::builder(Signal::BeginMessage, "Gauge")
            .id(GAUGE_TEMPLATE_ID)
            .encoded_length(GAUGE_BLOCK_LENGTH)
            .build(),
    )
    .unwrap()
    .encoding_field(field("id", 1), leaf("uint32", PrimitiveType::Uint32, 0))
    .unwrap()
    .encoding_field(
        Token::builder(Signal::BeginField, "readings").id(2).version(3).build(),
        Token::builder(Signal::Encoding, "int32")
            .offset(4)
            .version(3)
            .encoded_length(16)
            .encoding(readings)
            .build(),
    )
    .unwrap()
    .end(Signal::EndMessage)
    .unwrap();

    let mut ir = Ir::new("gauges", SCHEMA_ID, 3, header_tokens().unwrap()).unwrap();
    ir.add_message(b.build().unwrap()).unwrap();
    ir
}
