use crate::render::Point;

/// Element the host found under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub enum HitTarget<I> {
    Image(I),
    Other,
}

impl<I> HitTarget<I> {
    pub fn image(&self) -> Option<&I> {
        match self {
            Self::Image(image) => Some(image),
            Self::Other => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent<I> {
    pub position: Point,
    pub target: HitTarget<I>,
}

impl<I> PointerEvent<I> {
    pub fn over_image(x: f32, y: f32, image: I) -> Self {
        Self {
            position: Point { x, y },
            target: HitTarget::Image(image),
        }
    }

    pub fn elsewhere(x: f32, y: f32) -> Self {
        Self {
            position: Point { x, y },
            target: HitTarget::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent<I> {
    MouseMove(PointerEvent<I>),
    MouseDown(PointerEvent<I>),
    MouseUp(PointerEvent<I>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_image_targets_expose_a_handle() {
        let on = PointerEvent::over_image(1.0, 2.0, 7u32);
        let off = PointerEvent::<u32>::elsewhere(1.0, 2.0);
        assert_eq!(on.target.image(), Some(&7));
        assert_eq!(off.target.image(), None);
    }
}
