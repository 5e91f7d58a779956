/// дописать кодпоинт(ы) по коду в результирующую строку
#[macro_export]
macro_rules! write {
    ($result: expr, $($code: expr),+) => {
        {
            $(
                $result.push(unsafe { char::from_u32_unchecked($code) });
            )+
        }
    };
}
