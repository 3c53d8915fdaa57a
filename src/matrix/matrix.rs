pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Self;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn row(&self, row: usize) -> &[T];
    fn swap_rows(&mut self, a: usize, b: usize);
    fn at(&self, row: usize, col: usize) -> T;
}
