// @generated
/// Represent an empty message.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Empty {}
/// Search related messages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Search {}
/// Nested message and enum types in `Search`.
pub mod search {
    /// Represent a search request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Request {
        /// The vector to be searched.
        #[prost(float, repeated, tag = "1")]
        pub vector: ::prost::alloc::vec::Vec<f32>,
        /// The configuration of the search request.
        #[prost(message, optional, tag = "2")]
        pub config: ::core::option::Option<Config>,
    }
    /// Represent the multiple search request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MultiRequest {
        #[prost(message, repeated, tag = "1")]
        pub requests: ::prost::alloc::vec::Vec<Request>,
    }
    /// Represent a search by ID request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct IdRequest {
        /// The vector ID to be searched.
        #[prost(string, tag = "1")]
        pub id: ::prost::alloc::string::String,
        /// The configuration of the search request.
        #[prost(message, optional, tag = "2")]
        pub config: ::core::option::Option<Config>,
    }
    /// Represent the multiple search by ID request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MultiIdRequest {
        #[prost(message, repeated, tag = "1")]
        pub requests: ::prost::alloc::vec::Vec<IdRequest>,
    }
    /// Represent search configuration.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Config {
        /// Unique request ID.
        #[prost(string, tag = "1")]
        pub request_id: ::prost::alloc::string::String,
        /// Maximum number of results to be returned.
        #[prost(uint32, tag = "2")]
        pub num: u32,
        /// Search radius.
        #[prost(float, tag = "3")]
        pub radius: f32,
        /// Search coefficient.
        #[prost(float, tag = "4")]
        pub epsilon: f32,
        /// Search timeout in nanoseconds.
        #[prost(int64, tag = "5")]
        pub timeout: i64,
        /// Ingress filter configurations.
        #[prost(message, optional, tag = "6")]
        pub ingress_filters: ::core::option::Option<super::filter::Config>,
        /// Egress filter configurations.
        #[prost(message, optional, tag = "7")]
        pub egress_filters: ::core::option::Option<super::filter::Config>,
        /// Minimum number of results to be returned.
        #[prost(uint32, tag = "8")]
        pub min_num: u32,
    }
    /// Represent a search response.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Response {
        /// The unique request ID.
        #[prost(string, tag = "1")]
        pub request_id: ::prost::alloc::string::String,
        /// Search results.
        #[prost(message, repeated, tag = "2")]
        pub results: ::prost::alloc::vec::Vec<super::object::Distance>,
    }
    /// Represent multiple search responses.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Responses {
        #[prost(message, repeated, tag = "1")]
        pub responses: ::prost::alloc::vec::Vec<Response>,
    }
    /// Represent stream search response.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct StreamResponse {
        #[prost(oneof = "stream_response::Payload", tags = "1, 2")]
        pub payload: ::core::option::Option<stream_response::Payload>,
    }
    /// Nested message and enum types in `StreamResponse`.
    pub mod stream_response {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Payload {
            /// Represent the search response.
            #[prost(message, tag = "1")]
            Response(super::Response),
            /// The RPC error status.
            #[prost(message, tag = "2")]
            Status(super::super::super::super::google::rpc::Status),
        }
    }
}
/// Filter related messages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Filter {}
/// Nested message and enum types in `Filter`.
pub mod filter {
    /// Represent the target filter server.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Target {
        /// The target hostname.
        #[prost(string, tag = "1")]
        pub host: ::prost::alloc::string::String,
        /// The target port.
        #[prost(uint32, tag = "2")]
        pub port: u32,
    }
    /// Represent filter configuration.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Config {
        #[prost(message, repeated, tag = "1")]
        pub targets: ::prost::alloc::vec::Vec<Target>,
    }
}
/// Insert related messages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Insert {}
/// Nested message and enum types in `Insert`.
pub mod insert {
    /// Represent the insert request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Request {
        /// The vector to be inserted.
        #[prost(message, optional, tag = "1")]
        pub vector: ::core::option::Option<super::object::Vector>,
        /// The configuration of the insert request.
        #[prost(message, optional, tag = "2")]
        pub config: ::core::option::Option<Config>,
    }
    /// Represent the multiple insert request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MultiRequest {
        #[prost(message, repeated, tag = "1")]
        pub requests: ::prost::alloc::vec::Vec<Request>,
    }
    /// Represent insert configurations.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Config {
        /// A flag to skip exist check during insert operation.
        #[prost(bool, tag = "1")]
        pub skip_strict_exist_check: bool,
        /// Filter configurations.
        #[prost(message, optional, tag = "2")]
        pub filters: ::core::option::Option<super::filter::Config>,
        /// Insert timestamp.
        #[prost(int64, tag = "3")]
        pub timestamp: i64,
    }
}
/// Update related messages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Update {}
/// Nested message and enum types in `Update`.
pub mod update {
    /// Represent the update request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Request {
        /// The vector to be updated.
        #[prost(message, optional, tag = "1")]
        pub vector: ::core::option::Option<super::object::Vector>,
        /// The configuration of the update request.
        #[prost(message, optional, tag = "2")]
        pub config: ::core::option::Option<Config>,
    }
    /// Represent the multiple update request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MultiRequest {
        #[prost(message, repeated, tag = "1")]
        pub requests: ::prost::alloc::vec::Vec<Request>,
    }
    /// Represent the update configuration.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Config {
        /// A flag to skip exist check during update operation.
        #[prost(bool, tag = "1")]
        pub skip_strict_exist_check: bool,
        /// Filter configuration.
        #[prost(message, optional, tag = "2")]
        pub filters: ::core::option::Option<super::filter::Config>,
        /// Update timestamp.
        #[prost(int64, tag = "3")]
        pub timestamp: i64,
    }
}
/// Upsert related messages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Upsert {}
/// Nested message and enum types in `Upsert`.
pub mod upsert {
    /// Represent the upsert request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Request {
        /// The vector to be upserted.
        #[prost(message, optional, tag = "1")]
        pub vector: ::core::option::Option<super::object::Vector>,
        /// The configuration of the upsert request.
        #[prost(message, optional, tag = "2")]
        pub config: ::core::option::Option<Config>,
    }
    /// Represent the multiple upsert request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MultiRequest {
        #[prost(message, repeated, tag = "1")]
        pub requests: ::prost::alloc::vec::Vec<Request>,
    }
    /// Represent the upsert configuration.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Config {
        /// A flag to skip exist check during upsert operation.
        #[prost(bool, tag = "1")]
        pub skip_strict_exist_check: bool,
        /// Filter configuration.
        #[prost(message, optional, tag = "2")]
        pub filters: ::core::option::Option<super::filter::Config>,
        /// Upsert timestamp.
        #[prost(int64, tag = "3")]
        pub timestamp: i64,
    }
}
/// Remove related messages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Remove {}
/// Nested message and enum types in `Remove`.
pub mod remove {
    /// Represent the remove request.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Request {
        /// The object ID to be removed.
        #[prost(message, optional, tag = "1")]
        pub id: ::core::option::Option<super::object::Id>,
        /// The configuration of the remove request.
        #[prost(message, optional, tag = "2")]
        pub config: ::core::option::Option<Config>,
    }
    /// Represent the multiple remove request.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct MultiRequest {
        #[prost(message, repeated, tag = "1")]
        pub requests: ::prost::alloc::vec::Vec<Request>,
    }
    /// Represent the remove configuration.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Config {
        /// A flag to skip exist check during remove operation.
        #[prost(bool, tag = "1")]
        pub skip_strict_exist_check: bool,
        /// Remove timestamp.
        #[prost(int64, tag = "3")]
        pub timestamp: i64,
    }
}
/// Common messages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Object {}
/// Nested message and enum types in `Object`.
pub mod object {
    /// Represent the vector ID.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Id {
        #[prost(string, tag = "1")]
        pub id: ::prost::alloc::string::String,
    }
    /// Represent multiple vector IDs.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Ids {
        #[prost(string, repeated, tag = "1")]
        pub ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
    /// Represent a vector.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Vector {
        /// The vector ID.
        #[prost(string, tag = "1")]
        pub id: ::prost::alloc::string::String,
        /// The vector.
        #[prost(float, repeated, tag = "2")]
        pub vector: ::prost::alloc::vec::Vec<f32>,
    }
    /// Represent multiple vectors.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Vectors {
        #[prost(message, repeated, tag = "1")]
        pub vectors: ::prost::alloc::vec::Vec<Vector>,
    }
    /// Represent the ID and distance pair.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Distance {
        /// The vector ID.
        #[prost(string, tag = "1")]
        pub id: ::prost::alloc::string::String,
        /// The distance.
        #[prost(float, tag = "2")]
        pub distance: f32,
    }
    /// Represent the vector location.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Location {
        /// The name of the location.
        #[prost(string, tag = "1")]
        pub name: ::prost::alloc::string::String,
        /// The UUID of the vector.
        #[prost(string, tag = "2")]
        pub uuid: ::prost::alloc::string::String,
        /// The IP list.
        #[prost(string, repeated, tag = "3")]
        pub ips: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
    /// Represent multiple vector locations.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Locations {
        #[prost(message, repeated, tag = "1")]
        pub locations: ::prost::alloc::vec::Vec<Location>,
    }
    /// Represent the stream response of the vector location.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct StreamLocation {
        #[prost(oneof = "stream_location::Payload", tags = "1, 2")]
        pub payload: ::core::option::Option<stream_location::Payload>,
    }
    /// Nested message and enum types in `StreamLocation`.
    pub mod stream_location {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Payload {
            /// The vector location.
            #[prost(message, tag = "1")]
            Location(super::Location),
            /// The RPC error status.
            #[prost(message, tag = "2")]
            Status(super::super::super::super::google::rpc::Status),
        }
    }
    /// Represent stream response of the vector.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct StreamVector {
        #[prost(oneof = "stream_vector::Payload", tags = "1, 2")]
        pub payload: ::core::option::Option<stream_vector::Payload>,
    }
    /// Nested message and enum types in `StreamVector`.
    pub mod stream_vector {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Payload {
            /// The vector.
            #[prost(message, tag = "1")]
            Vector(super::Vector),
            /// The RPC error status.
            #[prost(message, tag = "2")]
            Status(super::super::super::super::google::rpc::Status),
        }
    }
}
/// Meta related messages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Meta {}
/// Nested message and enum types in `Meta`.
pub mod meta {
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Key {
        #[prost(string, tag = "1")]
        pub key: ::prost::alloc::string::String,
    }
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Keys {
        #[prost(string, repeated, tag = "1")]
        pub keys: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Val {
        #[prost(string, tag = "1")]
        pub val: ::prost::alloc::string::String,
    }
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Vals {
        #[prost(string, repeated, tag = "1")]
        pub vals: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct KeyVal {
        #[prost(string, tag = "1")]
        pub key: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub val: ::prost::alloc::string::String,
    }
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct KeyVals {
        #[prost(message, repeated, tag = "1")]
        pub kvs: ::prost::alloc::vec::Vec<KeyVal>,
    }
}
