//! SenML unit labels
//!
//! Units are opaque strings on the wire; these constants cover the RFC 8428
//! and RFC 8798 registrations plus common secondary units. Labels marked as
//! not recommended are accepted but should not be produced.

// RFC8428
pub const NONE: &str = "";
pub const METER: &str = "m";
pub const KILOGRAM: &str = "kg";
/// Not recommended
pub const GRAM: &str = "g";
pub const SECOND: &str = "s";
pub const AMPERE: &str = "A";
pub const KELVIN: &str = "K";
pub const CANDELA: &str = "cd";
pub const MOLE: &str = "mol";
pub const HERTZ: &str = "Hz";
pub const RADIAN: &str = "rad";
pub const STERADIAN: &str = "sr";
pub const NEWTON: &str = "N";
pub const PASCAL: &str = "Pa";
pub const JOULE: &str = "J";
pub const WATT: &str = "W";
pub const COULOMB: &str = "C";
pub const VOLT: &str = "V";
pub const FARAD: &str = "F";
pub const OHM: &str = "Ohm";
pub const SIEMENS: &str = "S";
pub const WEBER: &str = "Wb";
pub const TESLA: &str = "T";
pub const HENRY: &str = "H";
pub const CELSIUS: &str = "Cel";
pub const LUMEN: &str = "lm";
pub const LUX: &str = "lx";
pub const BECQUEREL: &str = "Bq";
pub const GRAY: &str = "Gy";
pub const SIEVERT: &str = "Sv";
pub const KATAL: &str = "kat";
pub const SQUARE_METER: &str = "m2";
pub const CUBIC_METER: &str = "m3";
/// Not recommended
pub const LITER: &str = "l";
pub const METER_PER_SECOND: &str = "m/s";
pub const METER_PER_SQUARE_SECOND: &str = "m/s2";
pub const CUBIC_METER_PER_SECOND: &str = "m3/s";
/// Not recommended
pub const LITER_PER_SECOND: &str = "l/s";
pub const WATT_PER_SQUARE_METER: &str = "W/m2";
pub const CANDELA_PER_SQUARE_METER: &str = "cd/m2";
pub const BIT: &str = "bit";
pub const BIT_PER_SECOND: &str = "bit/s";
pub const LATITUDE: &str = "lat";
pub const LONGITUDE: &str = "lon";
pub const PH: &str = "pH";
pub const DECIBEL: &str = "dB";
pub const DBW: &str = "dBW";
/// Not recommended
pub const BEL: &str = "Bspl";
pub const COUNT: &str = "count";
pub const RATIO: &str = "/";
/// Not recommended
pub const PERCENT_RATIO: &str = "%";
pub const RELATIVE_HUMIDITY_PERCENT: &str = "%RH";
pub const REMAINING_BATTERY_PERCENT: &str = "%EL";
pub const REMAINING_BATTERY_SECONDS: &str = "EL";
pub const RATE: &str = "1/s";
/// Not recommended
pub const RPM: &str = "1/min";
/// Not recommended
pub const HEART_RATE: &str = "beat/min";
/// Not recommended
pub const HEART_BEATS: &str = "beats";
pub const CONDUCTIVITY: &str = "S/m";

// RFC8798
pub const BYTE: &str = "B";
pub const VOLT_AMPERE: &str = "VA";
pub const VOLT_AMPERE_SECOND: &str = "VAs";
pub const VOLT_AMPERE_REACTIVE: &str = "var";
pub const VOLT_AMPERE_REACTIVE_SECOND: &str = "vars";
pub const JOULE_PER_METER: &str = "J/m";
pub const KILOGRAM_PER_CUBIC_METER: &str = "kg/m3";
/// Not recommended
pub const DEGREE: &str = "deg";

// ISO 7027-1:2016
pub const NEPHELOMETRIC_TURBIDITY_UNIT: &str = "NTU";

// Secondary units (RFC8798)
pub const MILLISECOND: &str = "ms";
pub const MINUTE: &str = "min";
pub const HOUR: &str = "h";
pub const MEGAHERTZ: &str = "MHz";
pub const KILOWATT: &str = "kW";
pub const KILOVOLT_AMPERE: &str = "kVA";
pub const KILOVAR: &str = "kvar";
pub const AMPERE_HOUR: &str = "Ah";
pub const WATT_HOUR: &str = "Wh";
pub const KILOWATT_HOUR: &str = "kWh";
pub const VAR_HOUR: &str = "varh";
pub const KILOVAR_HOUR: &str = "kvarh";
pub const KILOVOLT_AMPERE_HOUR: &str = "kVAh";
pub const WATT_HOUR_PER_KILOMETER: &str = "Wh/km";
pub const KIBIBYTE: &str = "KiB";
pub const GIGABYTE: &str = "GB";
pub const MEGABIT_PER_SECOND: &str = "Mbit/s";
pub const BYTE_PER_SECOND: &str = "B/s";
pub const MEGABYTE_PER_SECOND: &str = "MB/s";
pub const MILLIVOLT: &str = "mV";
pub const MILLIAMPERE: &str = "mA";
pub const DECIBEL_MILLIWATT: &str = "dBm";
pub const MICROGRAM_PER_CUBIC_METER: &str = "ug/m3";
pub const MILLIMETER_PER_HOUR: &str = "mm/h";
pub const METER_PER_HOUR: &str = "m/h";
pub const PARTS_PER_MILLION: &str = "ppm";
pub const PERCENT: &str = "/100";
pub const PERMILLE: &str = "/1000";
pub const HECTOPASCAL: &str = "hPa";
pub const MILLIMETER: &str = "mm";
pub const CENTIMETER: &str = "cm";
pub const KILOMETER: &str = "km";
pub const KILOMETER_PER_HOUR: &str = "km/h";

// Secondary units (CoRE-1)
pub const PARTS_PER_BILLION: &str = "ppb";
pub const PARTS_PER_TRILLION: &str = "ppt";
pub const VOLT_AMPERE_HOUR: &str = "VAh";
pub const MILLIGRAM_PER_LITER: &str = "mg/l";
pub const MICROGRAM_PER_LITER: &str = "ug/l";
pub const GRAM_PER_LITER: &str = "g/l";
