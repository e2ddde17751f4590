/// Port the relay listens on unless configured otherwise
pub const DEFAULT_PORT: u16 = 45678;

/// Relay address used by clients that were not told where the relay lives
pub const DEFAULT_RELAY_HOST: &str = "localhost:45678";

/// The single route served by the relay
pub const RELAY_PATH: &str = "/za";

/// Base64-encoded HTTP method of the outbound call
pub const METHOD_HEADER: &str = "x-za-method";

/// Base64-encoded absolute URL of the outbound call
pub const URL_HEADER: &str = "x-za-url";

/// Decimal count of the indexed header pairs that follow
pub const HEADER_COUNT_HEADER: &str = "x-za-headercount";

/// Prefix of the base64-encoded name of the i-th outbound header
pub const HEADER_KEY_PREFIX: &str = "x-za-hk-";

/// Prefix of the base64-encoded value of the i-th outbound header
pub const HEADER_VALUE_PREFIX: &str = "x-za-hv-";

/// User-Agent sent by relay clients
pub const CLIENT_USER_AGENT: &str = "za";

/// Body returned for any request that faults inside the relay
pub const FAULT_BODY: &str = "Internal Server Error";
