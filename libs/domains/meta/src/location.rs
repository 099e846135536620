use rpc::payload::v1::object;

/// Reassemble locations from split sub-batches into original request order.
///
/// Each bucket carries the request positions it was built from, in the order
/// its requests were sent. A backend answering with fewer locations than
/// requests leaves the remaining positions empty.
pub fn restore_order(
    total: usize,
    buckets: Vec<(Vec<usize>, object::Locations)>,
) -> object::Locations {
    let mut locations = vec![object::Location::default(); total];
    for (positions, locs) in buckets {
        for (pos, loc) in positions.into_iter().zip(locs.locations) {
            if let Some(slot) = locations.get_mut(pos) {
                *slot = loc;
            }
        }
    }
    object::Locations { locations }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(uuid: &str) -> object::Location {
        object::Location {
            name: "agent-0".to_string(),
            uuid: uuid.to_string(),
            ips: vec!["10.0.0.1".to_string()],
        }
    }

    #[test]
    fn test_interleaved_buckets() {
        let inserted = object::Locations {
            locations: vec![loc("a"), loc("c")],
        };
        let updated = object::Locations {
            locations: vec![loc("b")],
        };
        let out = restore_order(3, vec![(vec![0, 2], inserted), (vec![1], updated)]);
        let uuids: Vec<_> = out.locations.iter().map(|l| l.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_short_bucket_leaves_gap() {
        let out = restore_order(
            2,
            vec![(vec![0, 1], object::Locations { locations: vec![loc("a")] })],
        );
        assert_eq!(out.locations[0].uuid, "a");
        assert_eq!(out.locations[1], object::Location::default());
    }
}
