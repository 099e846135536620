//! End-to-end: a real gateway server in front of in-process upstream fakes.

use std::net::SocketAddr;
use std::time::Duration;

use core_grpc::ChannelConfig;
use domain_meta::{CacheConfig, DimensionBounds, GatewayConfig};
use rpc::gateway::v1::vector_gateway_client::VectorGatewayClient;
use rpc::payload::v1::{insert, object, remove, search};
use test_utils::assertions::assert_code;
use test_utils::{TestDataBuilder, TestMetaStore, TestVectorBackend};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tonic::Code;
use tonic::codec::CompressionEncoding;
use tonic::transport::Channel;

struct Gateway {
    meta: TestMetaStore,
    agent: TestVectorBackend,
    addr: SocketAddr,
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<eyre::Result<()>>,
}

impl Gateway {
    async fn start() -> Self {
        let meta = TestMetaStore::new().await;
        let agent = TestVectorBackend::new().await;

        let config = GatewayConfig {
            backend_addr: agent.url(),
            meta_addr: meta.url(),
            cache: Some(CacheConfig::default()),
            monitor_interval: Duration::from_secs(1),
            stream_concurrency: 4,
            dimensions: DimensionBounds::default(),
            channel: ChannelConfig::default(),
        };

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, signal) = watch::channel(false);
        let handle = tokio::spawn(meta_gateway::serve(config, listener, signal));

        Self {
            meta,
            agent,
            addr,
            shutdown,
            handle,
        }
    }

    async fn client(&self) -> VectorGatewayClient<Channel> {
        VectorGatewayClient::connect(format!("http://{}", self.addr))
            .await
            .unwrap()
            .send_compressed(CompressionEncoding::Zstd)
            .accept_compressed(CompressionEncoding::Zstd)
    }

    async fn stop(self) {
        self.shutdown.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("gateway did not drain within 5s")
            .unwrap()
            .unwrap();
    }
}

fn insert_request(key: &str, vector: Vec<f32>) -> insert::Request {
    insert::Request {
        vector: Some(object::Vector {
            id: key.to_string(),
            vector,
        }),
        config: None,
    }
}

fn key_id(key: &str) -> object::Id {
    object::Id { id: key.to_string() }
}

#[tokio::test]
async fn test_key_lifecycle() {
    let gw = Gateway::start().await;
    let mut client = gw.client().await;
    let data = TestDataBuilder::from_test_name("test_key_lifecycle");
    let v1 = data.vector(4);

    let loc = client
        .insert(insert_request("k1", v1.clone()))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(gw.meta.store.id_of("k1"), Some(loc.uuid.clone()));

    let found = client.exists(key_id("k1")).await.unwrap().into_inner();
    assert_eq!(found.id, "k1");

    let res = client
        .search(search::Request {
            vector: v1.clone(),
            config: Some(search::Config {
                num: 1,
                ..Default::default()
            }),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(res.results[0].id, "k1");

    let obj = client.get_object(key_id("k1")).await.unwrap().into_inner();
    assert_eq!(obj.id, "k1");
    assert_eq!(obj.vector, v1);

    assert_code(
        client.insert(insert_request("k1", data.vector(4))).await,
        Code::AlreadyExists,
        "duplicate insert",
    );

    client
        .remove(remove::Request {
            id: Some(key_id("k1")),
            config: None,
        })
        .await
        .unwrap();
    assert!(gw.agent.backend.is_empty());
    assert!(gw.meta.store.is_empty());

    assert_code(client.exists(key_id("k1")).await, Code::NotFound, "exists after remove");
    assert_code(client.get_object(key_id("k1")).await, Code::NotFound, "get after remove");

    gw.stop().await;
}

#[tokio::test]
async fn test_invalid_dimension_is_rejected() {
    let gw = Gateway::start().await;
    let mut client = gw.client().await;

    assert_code(
        client.insert(insert_request("k1", vec![0.5])).await,
        Code::InvalidArgument,
        "one-dimensional insert",
    );
    assert!(gw.agent.backend.is_empty());

    gw.stop().await;
}

#[tokio::test]
async fn test_stream_insert_answers_every_request() {
    let gw = Gateway::start().await;
    let mut client = gw.client().await;

    let requests = vec![
        insert_request("k1", vec![0.1, 0.2]),
        insert_request("k2", vec![0.3, 0.4]),
        insert_request("k3", vec![0.5]),
    ];
    let mut responses = client
        .stream_insert(tokio_stream::iter(requests))
        .await
        .unwrap()
        .into_inner();

    let (mut locations, mut statuses) = (0, Vec::new());
    while let Some(msg) = responses.message().await.unwrap() {
        match msg.payload {
            Some(object::stream_location::Payload::Location(_)) => locations += 1,
            Some(object::stream_location::Payload::Status(status)) => statuses.push(status.code),
            None => panic!("empty stream envelope"),
        }
    }

    assert_eq!(locations, 2);
    assert_eq!(statuses, [Code::InvalidArgument as i32]);
    assert_eq!(gw.meta.store.len(), 2);

    gw.stop().await;
}

#[tokio::test]
async fn test_stream_get_object_reports_missing_keys_inline() {
    let gw = Gateway::start().await;
    let mut client = gw.client().await;
    client
        .insert(insert_request("k1", vec![0.1, 0.2]))
        .await
        .unwrap();

    let mut responses = client
        .stream_get_object(tokio_stream::iter(vec![key_id("k1"), key_id("missing")]))
        .await
        .unwrap()
        .into_inner();

    let mut keys = Vec::new();
    let mut missing = 0;
    while let Some(msg) = responses.message().await.unwrap() {
        match msg.payload {
            Some(object::stream_vector::Payload::Vector(v)) => keys.push(v.id),
            Some(object::stream_vector::Payload::Status(status)) => {
                assert_eq!(status.code, Code::NotFound as i32);
                missing += 1;
            }
            None => panic!("empty stream envelope"),
        }
    }

    assert_eq!(keys, ["k1"]);
    assert_eq!(missing, 1);

    gw.stop().await;
}

#[tokio::test]
async fn test_multi_search_returns_keys() {
    let gw = Gateway::start().await;
    let mut client = gw.client().await;
    client
        .multi_insert(insert::MultiRequest {
            requests: vec![
                insert_request("near", vec![0.0, 0.0]),
                insert_request("far", vec![9.0, 9.0]),
            ],
        })
        .await
        .unwrap();

    let query = |vector: Vec<f32>| search::Request {
        vector,
        config: Some(search::Config {
            num: 1,
            ..Default::default()
        }),
    };
    let res = client
        .multi_search(search::MultiRequest {
            requests: vec![query(vec![0.1, 0.1]), query(vec![8.9, 8.9])],
        })
        .await
        .unwrap()
        .into_inner();

    let top: Vec<&str> = res
        .responses
        .iter()
        .map(|r| r.results[0].id.as_str())
        .collect();
    assert_eq!(top, ["near", "far"]);

    gw.stop().await;
}

#[tokio::test]
async fn test_health_reports_serving() {
    use tonic_health::pb::HealthCheckRequest;
    use tonic_health::pb::health_check_response::ServingStatus;
    use tonic_health::pb::health_client::HealthClient;

    let gw = Gateway::start().await;
    let channel = Channel::from_shared(format!("http://{}", gw.addr))
        .unwrap()
        .connect()
        .await
        .unwrap();
    let mut health = HealthClient::new(channel);

    let res = health
        .check(HealthCheckRequest {
            service: "gateway.v1.VectorGateway".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(res.status(), ServingStatus::Serving);

    gw.stop().await;
}
