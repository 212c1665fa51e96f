//! Packet Dump - Deklarasi record dan dump hasil serialisasi
//!
//! Menampilkan layout, bytes (hex) dan hasil baca ulang untuk satu
//! record `TokenAnalysis` yang di-nest ke dalam `Envelope`.
//!
//! Usage:
//!   cargo run --example packet_dump

use binlayout::{
    BinarySerializable, Endian, Error, FieldDescriptor, FieldReader, FieldValue, HexFormat,
    NumericType, RecordShape, Result, TextEncoding,
};

/// Token Analysis Result
static TOKEN_FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor::raw(1, "contract_address", Some(20)),
    FieldDescriptor::numeric(2, "chain_id", NumericType::U32, Endian::Big),
    FieldDescriptor::numeric(3, "risk_score", NumericType::U8, Endian::Big),
    FieldDescriptor::numeric(5, "liquidity_usd", NumericType::F64, Endian::Little),
    FieldDescriptor::numeric(4, "holder_count", NumericType::U32, Endian::Little),
];
static TOKEN: RecordShape = RecordShape::new("TokenAnalysis", &TOKEN_FIELDS);

struct TokenAnalysis {
    contract_address: [u8; 20],
    chain_id: u32,
    risk_score: u8,
    holder_count: u32,
    liquidity_usd: f64,
}

impl BinarySerializable for TokenAnalysis {
    fn shape(&self) -> &RecordShape {
        &TOKEN
    }

    fn field_value(&self, field: &FieldDescriptor) -> Result<FieldValue<'_>> {
        match field.position {
            1 => Ok(self.contract_address.as_slice().into()),
            2 => Ok(self.chain_id.into()),
            3 => Ok(self.risk_score.into()),
            4 => Ok(self.holder_count.into()),
            5 => Ok(self.liquidity_usd.into()),
            _ => Err(Error::not_implemented(self.shape(), field)),
        }
    }
}

static ENVELOPE_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::numeric(1, "sequence", NumericType::U64, Endian::Big),
    FieldDescriptor::text(2, "source", TextEncoding::Utf8, true),
    FieldDescriptor::nested(3, "analysis", &TOKEN),
];
static ENVELOPE: RecordShape = RecordShape::new("Envelope", &ENVELOPE_FIELDS);

struct Envelope {
    sequence: u64,
    source: String,
    analysis: TokenAnalysis,
}

impl BinarySerializable for Envelope {
    fn shape(&self) -> &RecordShape {
        &ENVELOPE
    }

    fn field_value(&self, field: &FieldDescriptor) -> Result<FieldValue<'_>> {
        match field.position {
            1 => Ok(self.sequence.into()),
            2 => Ok((&self.source).into()),
            3 => Ok(FieldValue::Nested(Some(&self.analysis))),
            _ => Err(Error::not_implemented(self.shape(), field)),
        }
    }
}

fn main() -> Result<()> {
    println!("📦 binlayout - Packet Dump");
    println!("==========================\n");

    let mut address = [0u8; 20];
    for (i, b) in address.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(13);
    }

    let envelope = Envelope {
        sequence: 7,
        source: "shield".to_string(),
        analysis: TokenAnalysis {
            contract_address: address,
            chain_id: 8453,
            risk_score: 42,
            holder_count: 1_337,
            liquidity_usd: 125_000.5,
        },
    };

    println!("📊 Layout");
    println!("---------");
    println!("{}", envelope.describe()?);

    let bytes = envelope.to_bytes()?;
    println!("📊 Bytes ({} total)", bytes.len());
    println!("-----------------");
    println!("{}\n", envelope.to_hex_with(&HexFormat::with_separator(' '))?);

    println!("📊 Read back");
    println!("------------");
    let mut reader = FieldReader::new(bytes.as_slice());
    println!("  sequence:      {}", reader.read::<u64>(Endian::Big)?);
    println!("  source:        {}", reader.read_text(9, TextEncoding::Utf8, true)?);
    println!("  address:       {:02x?}", reader.read_raw(20)?);
    println!("  chain_id:      {}", reader.read::<u32>(Endian::Big)?);
    println!("  risk_score:    {}", reader.read::<u8>(Endian::Big)?);
    println!("  holder_count:  {}", reader.read::<u32>(Endian::Little)?);
    println!("  liquidity_usd: {}", reader.read::<f64>(Endian::Little)?);

    println!("\n✅ Done");
    Ok(())
}
