/// Return a copy of `list` without any element equal to `value`.
///
/// # Examples
///
/// ```
/// use dom_kit_util::arrays::remove_item_by_value;
///
/// let list = vec![1, 2, 1, 3];
/// assert_eq!(remove_item_by_value(&list, &1), vec![2, 3]);
/// ```
pub fn remove_item_by_value<T: Clone + PartialEq>(list: &[T], value: &T) -> Vec<T> {
    list.iter()
        .filter(|item| *item != value)
        .cloned()
        .collect()
}

/// Circular index into `list`: `index + offset`, wrapping in both
/// directions. An offset of `-1` from index `0` lands on the last element;
/// an offset past the end wraps back to the front.
///
/// # Panics
///
/// Panics if the list is empty.
///
/// # Examples
///
/// ```
/// use dom_kit_util::arrays::wrapped_index;
///
/// let list = ["a", "b", "c"];
/// assert_eq!(wrapped_index(&list, 0, -1), 2);
/// assert_eq!(wrapped_index(&list, 0, 4), 1);
/// ```
pub fn wrapped_index<T>(list: &[T], index: usize, offset: isize) -> usize {
    let len = list.len() as isize;
    (index as isize + offset).rem_euclid(len) as usize
}

/// Look up the element `offset` positions away from `item`, wrapping around
/// the ends of the list. Returns `None` if `item` is not in the list.
///
/// # Examples
///
/// ```
/// use dom_kit_util::arrays::item_by_offset;
///
/// let ring = ["red", "green", "blue"];
/// assert_eq!(item_by_offset(&ring, &"red", -1), Some(&"blue"));
/// assert_eq!(item_by_offset(&ring, &"cyan", 1), None);
/// ```
pub fn item_by_offset<'a, T: PartialEq>(list: &'a [T], item: &T, offset: isize) -> Option<&'a T> {
    let index = list.iter().position(|it| it == item)?;
    Some(&list[wrapped_index(list, index, offset)])
}
