//! Tests for the visibility authorizer.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{MockFollowerGraph, MockPostStore, MockUserDirectory};
use crate::domain::{PostId, PostText};
use crate::test_support::fixture_timestamp;

struct Scenario {
    target: UserId,
    follower: UserId,
    target_exists: bool,
    follower_exists: bool,
    following: bool,
}

impl Scenario {
    fn new(target_exists: bool, follower_exists: bool, following: bool) -> Self {
        Self {
            target: UserId::random(),
            follower: UserId::random(),
            target_exists,
            follower_exists,
            following,
        }
    }

    fn authorizer(&self, expected_post_reads: usize) -> VisibilityAuthorizer {
        let known: Vec<UserId> = [
            (self.target_exists, self.target),
            (self.follower_exists, self.follower),
        ]
        .into_iter()
        .filter_map(|(present, id)| present.then_some(id))
        .collect();
        let mut users = MockUserDirectory::new();
        users
            .expect_exists()
            .returning(move |id| Ok(known.contains(id)));

        let following = self.following;
        let mut graph = MockFollowerGraph::new();
        graph
            .expect_is_following()
            .returning(move |_, _| Ok(following));

        let author = self.target;
        let mut posts = MockPostStore::new();
        posts
            .expect_list_by_user()
            .times(expected_post_reads)
            .returning(move |_| {
                Ok(vec![Post::new(
                    PostId::random(),
                    author,
                    PostText::new("Hello").expect("valid text"),
                    fixture_timestamp(),
                )])
            });

        VisibilityAuthorizer::new(Arc::new(users), Arc::new(graph), Arc::new(posts))
    }
}

#[rstest]
#[case(true, false, true, true, DenialReason::UnknownFollowerId)]
#[case(true, true, false, true, DenialReason::NotAFollower)]
#[case(true, true, true, false, DenialReason::MissingFollowerId)]
#[tokio::test]
async fn denials_follow_rule_order(
    #[case] target_exists: bool,
    #[case] follower_exists: bool,
    #[case] following: bool,
    #[case] supply_follower: bool,
    #[case] expected: DenialReason,
) {
    let scenario = Scenario::new(target_exists, follower_exists, following);
    let follower = supply_follower.then_some(scenario.follower);

    let state = scenario
        .authorizer(0)
        .authorize(&scenario.target, follower)
        .await
        .expect("decision reached");

    assert_eq!(state, VisibilityState::Denied(expected));
}

#[rstest]
#[tokio::test]
async fn unknown_target_wins_over_every_other_rule() {
    let scenario = Scenario::new(false, false, false);

    let err = scenario
        .authorizer(0)
        .list_visible_posts(&scenario.target, None)
        .await
        .expect_err("unknown target");

    assert_eq!(err, SocialError::UserNotFound(scenario.target));
}

#[rstest]
#[tokio::test]
async fn missing_follower_id_is_reported_regardless_of_edges() {
    let scenario = Scenario::new(true, true, true);

    let err = scenario
        .authorizer(0)
        .list_visible_posts(&scenario.target, None)
        .await
        .expect_err("header missing");

    assert_eq!(err, SocialError::MissingFollowerId);
}

#[rstest]
#[tokio::test]
async fn follower_sees_target_posts() {
    let scenario = Scenario::new(true, true, true);

    let posts = scenario
        .authorizer(1)
        .list_visible_posts(&scenario.target, Some(scenario.follower))
        .await
        .expect("authorized");

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author_id(), &scenario.target);
}

#[rstest]
#[tokio::test]
async fn target_is_not_implicitly_their_own_follower() {
    let scenario = Scenario::new(true, true, false);

    let err = scenario
        .authorizer(0)
        .list_visible_posts(&scenario.target, Some(scenario.target))
        .await
        .expect_err("no self edge");

    assert_eq!(err, SocialError::NotAFollower);
}

#[rstest]
#[tokio::test]
async fn store_faults_abort_the_decision() {
    let mut users = MockUserDirectory::new();
    users
        .expect_exists()
        .returning(|_| Err(SocialError::unavailable("user repository unavailable")));
    let mut posts = MockPostStore::new();
    posts.expect_list_by_user().times(0);
    let authorizer = VisibilityAuthorizer::new(
        Arc::new(users),
        Arc::new(MockFollowerGraph::new()),
        Arc::new(posts),
    );

    let err = authorizer
        .list_visible_posts(&UserId::random(), Some(UserId::random()))
        .await
        .expect_err("store down");

    assert!(matches!(err, SocialError::Unavailable { .. }));
}
