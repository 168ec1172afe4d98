/// Two equally sized buffers with swappable `current` and `next` roles.
///
/// Readers see `current` while a full pass writes into `next`; `swap` then
/// exchanges the roles without moving any element.
#[derive(Clone, Debug)]
pub struct DoubleBuffer<T> {
    buffers: [Vec<T>; 2],
    current: usize,
}

impl<T: Clone> DoubleBuffer<T> {
    /// Both buffers start out holding `initial`.
    pub fn new(initial: Vec<T>) -> DoubleBuffer<T> {
        DoubleBuffer {
            buffers: [initial.clone(), initial],
            current: 0,
        }
    }
}

impl<T> DoubleBuffer<T> {
    pub fn current(&self) -> &[T] {
        &self.buffers[self.current]
    }

    pub fn next(&self) -> &[T] {
        &self.buffers[1 - self.current]
    }

    /// Read access to `current` together with write access to `next`.
    pub fn split(&mut self) -> (&[T], &mut [T]) {
        let (first, second) = self.buffers.split_at_mut(1);
        if self.current == 0 {
            (first[0].as_slice(), second[0].as_mut_slice())
        } else {
            (second[0].as_slice(), first[0].as_mut_slice())
        }
    }

    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }
}
