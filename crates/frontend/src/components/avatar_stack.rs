//! Bounded avatar stack component.

use ui_types::{UserAvatar, USER_AVATARS};
use yew::prelude::*;

/// Most avatars shown before collapsing into the overflow badge.
const MAX_VISIBLE: usize = 4;

/// Avatars shown for a given user count, clamped to the visible cap and to
/// the available sample data.
fn visible_avatars(count: u32) -> &'static [UserAvatar] {
    let shown = (count as usize).min(MAX_VISIBLE).min(USER_AVATARS.len());
    &USER_AVATARS[..shown]
}

/// Overflow badge text for counts past the visible cap.
fn overflow_badge(count: u32) -> Option<String> {
    let count = count as usize;
    (count > MAX_VISIBLE).then(|| format!("+{}", count - MAX_VISIBLE))
}

/// Properties for the AvatarStack component.
#[derive(Properties, PartialEq)]
pub struct AvatarStackProps {
    /// Number of users holding the role.
    pub count: u32,
}

/// Visual summary of `count` users: up to four avatars drawn positionally
/// from the sample list, then a `+N` badge for the rest.
#[function_component(AvatarStack)]
pub fn avatar_stack(props: &AvatarStackProps) -> Html {
    html! {
        <div class="avatar-stack">
            { for visible_avatars(props.count).iter().enumerate().map(|(i, avatar)| html! {
                <img
                    class="avatar"
                    src={avatar.src}
                    alt={format!("User {}", i + 1)}
                    title={avatar.fallback}
                />
            })}
            if let Some(badge) = overflow_badge(props.count) {
                <span class="avatar-overflow">{ badge }</span>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack() {
        assert!(visible_avatars(0).is_empty());
        assert_eq!(overflow_badge(0), None);
    }

    #[test]
    fn test_caps_at_four_without_badge() {
        assert_eq!(visible_avatars(4).len(), 4);
        assert_eq!(overflow_badge(4), None);
    }

    #[test]
    fn test_overflow_badge() {
        assert_eq!(visible_avatars(5).len(), 4);
        assert_eq!(overflow_badge(5).as_deref(), Some("+1"));
    }

    #[test]
    fn test_clamps_to_sample_data() {
        // Counts past the sample list never index out of bounds; the badge
        // still reflects the requested count.
        assert_eq!(visible_avatars(9).len(), 4);
        assert_eq!(overflow_badge(9).as_deref(), Some("+5"));
    }

    #[test]
    fn test_avatars_are_positional() {
        let shown = visible_avatars(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[0].fallback, "U1");
        assert_eq!(shown[2].fallback, "U3");
    }
}
